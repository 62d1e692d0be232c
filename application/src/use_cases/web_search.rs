//! Web search use case.
//!
//! Runs one `tavily_search` invocation as a single linear pass:
//!
//! 1. Load settings from the [`ToolContext`] and resolve the API key
//! 2. Ask the contextual LLM to extract search parameters
//! 3. Recover and validate the parameters ([`extract_search_params`])
//! 4. Call the [`SearchBackend`] with the original query
//! 5. Render the response as HTML
//!
//! The caller always gets a string. Any failure is logged and turned into
//! [`NO_RESULTS`]. Backend failures are caught around step 4 on their own so
//! they can be told apart from setup failures in the logs.

use crate::ports::llm_gateway::GatewayError;
use crate::ports::search_backend::{SearchBackend, SearchBackendError, SearchRequest};
use crate::ports::tool_context::ToolContext;
use std::sync::Arc;
use std::time::Instant;
use tavily_domain::{
    NO_RESULTS, PromptTemplate, RenderOptions, SearchSettings, SettingsError, TAVILY_API_KEY_ENV,
    extract_search_params, render_response, truncate_str,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that abort an invocation before the backend is called.
#[derive(Error, Debug)]
pub enum WebSearchError {
    #[error("Failed to load settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("No Tavily API key configured (set it in settings or {TAVILY_API_KEY_ENV})")]
    MissingApiKey,

    #[error("Parameter extraction failed: {0}")]
    Extraction(#[from] GatewayError),
}

/// Looks up an environment variable by name.
pub type EnvLookup = fn(&str) -> Option<String>;

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Use case for running a Tavily search from a free-text request.
#[derive(Clone)]
pub struct WebSearchUseCase {
    backend: Arc<dyn SearchBackend>,
    env_lookup: EnvLookup,
}

impl WebSearchUseCase {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            backend,
            env_lookup: process_env,
        }
    }

    /// Replace the environment lookup used for the API key fallback.
    pub fn with_env_lookup(mut self, env_lookup: EnvLookup) -> Self {
        self.env_lookup = env_lookup;
        self
    }

    /// Run the tool. Never fails; see the module docs.
    pub async fn execute(&self, tool_input: &str, ctx: &dyn ToolContext) -> String {
        info!("Starting Tavily search: {}", truncate_str(tool_input, 100));
        let start = Instant::now();

        let output = match self.run(tool_input, ctx).await {
            Ok(html) => html,
            Err(e) => {
                error!("Error processing Tavily search request: {}", e);
                NO_RESULTS.to_string()
            }
        };

        debug!(
            duration_ms = start.elapsed().as_millis() as u64,
            bytes = output.len(),
            "Tavily search finished"
        );
        output
    }

    async fn run(&self, tool_input: &str, ctx: &dyn ToolContext) -> Result<String, WebSearchError> {
        let settings = ctx.load_settings()?;
        let api_key = settings
            .effective_api_key(self.env_lookup)
            .ok_or(WebSearchError::MissingApiKey)?;

        let prompt = PromptTemplate::search_parameters(tool_input, settings.max_results);
        let raw = ctx.llm(&prompt).await?;
        debug!("Parameter extraction response: {}", truncate_str(&raw, 500));

        let extracted = extract_search_params(&raw, settings.max_results);
        debug!(
            source = ?extracted.source,
            params = ?extracted.params,
            "Extracted search parameters"
        );

        let request = SearchRequest::new(tool_input, &extracted.params, &settings);
        Ok(self.search_and_render(&api_key, &request, &settings).await)
    }

    async fn search_and_render(
        &self,
        api_key: &str,
        request: &SearchRequest,
        settings: &SearchSettings,
    ) -> String {
        let body = match self.backend.search(api_key, request).await {
            Ok(body) => body,
            Err(e) => {
                log_backend_error(&e);
                return NO_RESULTS.to_string();
            }
        };

        let html = render_response(
            &body,
            RenderOptions {
                include_answer: settings.include_answer,
                include_images: settings.include_images,
            },
        );
        if html == NO_RESULTS {
            warn!("Tavily returned no usable results for: {}", truncate_str(&request.query, 100));
        }
        html
    }
}

fn log_backend_error(e: &SearchBackendError) {
    match e {
        SearchBackendError::Timeout => warn!("Error performing Tavily search: {}", e),
        _ => error!("Error performing Tavily search: {}", e),
    }
}
