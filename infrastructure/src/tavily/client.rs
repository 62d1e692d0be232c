//! `reqwest` client for the Tavily search API.

use super::error::TavilyError;
use async_trait::async_trait;
use serde_json::Value;
use std::time::{Duration, Instant};
use tavily_application::{SearchBackend, SearchBackendError, SearchRequest};
use tavily_domain::truncate_str;
use tracing::debug;

/// Public Tavily endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.tavily.com";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Tavily HTTP client.
///
/// The API key is supplied per call since settings are re-read on every
/// invocation.
#[derive(Debug, Clone)]
pub struct TavilyClient {
    client: reqwest::Client,
    base_url: String,
}

impl TavilyClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TavilyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tavily-tool/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TavilyError::ClientBuild)?;
        Ok(Self::with_client(client, base_url))
    }

    /// Wrap an existing client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_search(&self, api_key: &str, request: &SearchRequest) -> Result<Value, TavilyError> {
        let url = format!("{}/search", self.base_url);
        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TavilyError::Status {
                status: status.as_u16(),
                body: truncate_str(&body, 500).to_string(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TavilyError::Parse(e.to_string()))?;

        debug!(
            duration_ms = start.elapsed().as_millis() as u64,
            "Tavily responded for: {}",
            truncate_str(&request.query, 100)
        );
        Ok(body)
    }
}

#[async_trait]
impl SearchBackend for TavilyClient {
    async fn search(&self, api_key: &str, request: &SearchRequest) -> Result<Value, SearchBackendError> {
        self.post_search(api_key, request).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tavily_domain::{SearchParams, SearchSettings};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> TavilyClient {
        TavilyClient::new(server.uri(), Duration::from_secs(5)).unwrap()
    }

    fn request(query: &str) -> SearchRequest {
        SearchRequest::new(query, &SearchParams::defaults(5), &SearchSettings::default())
    }

    #[tokio::test]
    async fn test_search_posts_body_with_bearer_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("authorization", "Bearer tvly-key"))
            .and(body_json(json!({
                "query": "rust async",
                "search_depth": "basic",
                "include_answer": false,
                "max_results": 5,
                "include_domains": null,
                "include_images": false,
                "topic": "general",
                "time_range": null
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"title": "Async Rust", "url": "https://example.com"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let body = client(&server)
            .search("tvly-key", &request("rust async"))
            .await
            .unwrap();

        assert_eq!(body["results"][0]["title"], "Async Rust");
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = client(&server)
            .search("bad", &request("q"))
            .await
            .unwrap_err();

        match err {
            SearchBackendError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client(&server)
            .search("k", &request("q"))
            .await
            .unwrap_err();

        assert!(matches!(err, SearchBackendError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"results": []}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = TavilyClient::new(server.uri(), Duration::from_millis(50)).unwrap();
        let err = client.search("k", &request("q")).await.unwrap_err();

        assert!(matches!(err, SearchBackendError::Timeout));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = TavilyClient::with_client(reqwest::Client::new(), "https://api.tavily.com/");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }
}
