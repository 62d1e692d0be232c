//! Host context adapter
//!
//! [`HostToolContext`] is what the command-line front end hands to the web
//! search use case in place of a conversational host: a settings source plus
//! an [`LlmGateway`].

use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tavily_application::{GatewayError, LlmGateway, ToolContext};
use tavily_domain::{SearchSettings, SettingsError};
use tracing::debug;

/// Where a [`HostToolContext`] reads its settings from.
#[derive(Debug, Clone)]
pub enum SettingsSource {
    /// Settings already resolved from config files, validated on every load
    Fixed(SearchSettings),
    /// A host-style settings blob, validated on every load
    Stored(Value),
    /// A JSON settings file, re-read on every load
    File(PathBuf),
}

impl SettingsSource {
    fn load(&self) -> Result<SearchSettings, SettingsError> {
        match self {
            SettingsSource::Fixed(settings) => {
                match settings.validate().into_iter().find(|i| i.is_error()) {
                    Some(issue) => Err(SettingsError::Invalid(issue.message)),
                    None => Ok(settings.clone()),
                }
            }
            SettingsSource::Stored(value) => SearchSettings::from_json(value.clone()),
            SettingsSource::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    SettingsError::Unavailable(format!("{}: {}", path.display(), e))
                })?;
                let value: Value = serde_json::from_str(&text)
                    .map_err(|e| SettingsError::Invalid(format!("{}: {}", path.display(), e)))?;
                SearchSettings::from_json(value)
            }
        }
    }
}

/// [`ToolContext`] backed by a settings source and an LLM gateway.
pub struct HostToolContext {
    settings: SettingsSource,
    gateway: Arc<dyn LlmGateway>,
}

impl HostToolContext {
    pub fn new(settings: SettingsSource, gateway: Arc<dyn LlmGateway>) -> Self {
        Self { settings, gateway }
    }
}

#[async_trait]
impl ToolContext for HostToolContext {
    fn load_settings(&self) -> Result<SearchSettings, SettingsError> {
        let settings = self.settings.load()?;
        debug!(settings = ?settings.redacted(), "Loaded tool settings");
        Ok(settings)
    }

    async fn llm(&self, prompt: &str) -> Result<String, GatewayError> {
        self.gateway.complete(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{OpenAiCompatibleGateway, OpenAiGatewayConfig};
    use serde_json::json;
    use std::io::Write;
    use std::sync::Mutex;
    use std::time::Duration;
    use tavily_application::{SearchBackend, SearchBackendError, SearchRequest, WebSearchUseCase};
    use tavily_domain::{SearchDepth, SearchParams};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct EchoGateway;

    #[async_trait]
    impl LlmGateway for EchoGateway {
        async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
            Ok(format!("echo: {prompt}"))
        }
    }

    fn context(settings: SettingsSource) -> HostToolContext {
        HostToolContext::new(settings, Arc::new(EchoGateway))
    }

    #[tokio::test]
    async fn test_llm_delegates_to_gateway() {
        let ctx = context(SettingsSource::Fixed(SearchSettings::default()));
        assert_eq!(ctx.llm("hi").await.unwrap(), "echo: hi");
    }

    #[test]
    fn test_fixed_settings_are_validated() {
        let ok = context(SettingsSource::Fixed(SearchSettings::default()));
        assert_eq!(ok.load_settings().unwrap().max_results, 5);

        let bad = context(SettingsSource::Fixed(SearchSettings {
            max_results: 0,
            ..Default::default()
        }));
        assert!(matches!(bad.load_settings(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_stored_settings_are_validated() {
        let ctx = context(SettingsSource::Stored(json!({
            "tavily_api_key": "tvly-1",
            "search_depth": "advanced"
        })));
        let settings = ctx.load_settings().unwrap();
        assert_eq!(settings.api_key, "tvly-1");
        assert_eq!(settings.search_depth, SearchDepth::Advanced);
        assert_eq!(settings.max_results, 5);

        let bad = context(SettingsSource::Stored(json!({"max_results": 0})));
        assert!(matches!(bad.load_settings(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_settings_file_is_reread() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_results": 3}}"#).unwrap();
        let ctx = context(SettingsSource::File(file.path().to_path_buf()));
        assert_eq!(ctx.load_settings().unwrap().max_results, 3);

        std::fs::write(file.path(), r#"{"max_results": 9}"#).unwrap();
        assert_eq!(ctx.load_settings().unwrap().max_results, 9);
    }

    #[test]
    fn test_missing_settings_file_is_unavailable() {
        let ctx = context(SettingsSource::File(PathBuf::from("/nonexistent/settings.json")));
        assert!(matches!(
            ctx.load_settings(),
            Err(SettingsError::Unavailable(_))
        ));
    }

    struct RecordingBackend {
        requests: Mutex<Vec<SearchRequest>>,
    }

    #[async_trait]
    impl SearchBackend for RecordingBackend {
        async fn search(
            &self,
            _api_key: &str,
            request: &SearchRequest,
        ) -> Result<Value, SearchBackendError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(json!({"results": [{"title": "Forecast", "url": "https://example.com"}]}))
        }
    }

    #[tokio::test]
    async fn test_blank_model_reply_searches_with_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "   "}}]
            })))
            .mount(&server)
            .await;

        let gateway = OpenAiCompatibleGateway::new(OpenAiGatewayConfig {
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
            ..Default::default()
        })
        .unwrap();
        let settings = SearchSettings {
            api_key: "tvly-test".to_string(),
            ..Default::default()
        };
        let ctx = HostToolContext::new(SettingsSource::Fixed(settings.clone()), Arc::new(gateway));
        let backend = Arc::new(RecordingBackend {
            requests: Mutex::new(Vec::new()),
        });

        let html = WebSearchUseCase::new(backend.clone())
            .execute("weather in Rome", &ctx)
            .await;

        assert!(html.contains("<h3>1. Forecast</h3>"));
        let requests = backend.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0],
            SearchRequest::new("weather in Rome", &SearchParams::defaults(5), &settings)
        );
    }
}
