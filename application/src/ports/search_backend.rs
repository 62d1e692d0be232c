//! Search backend port
//!
//! Defines the request sent to the hosted search API. The response is handed
//! back as raw JSON and interpreted defensively by the domain layer.

use async_trait::async_trait;
use serde::Serialize;
use tavily_domain::{SearchDepth, SearchParams, SearchSettings, TimeRange, Topic};
use thiserror::Error;

/// Errors reported by a search backend
#[derive(Error, Debug)]
pub enum SearchBackendError {
    #[error("Search request failed: {0}")]
    RequestFailed(String),

    #[error("Search API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse search response: {0}")]
    InvalidResponse(String),

    #[error("Search request timed out")]
    Timeout,
}

/// Body of one search call.
///
/// `include_domains` and `time_range` serialize as `null` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    /// The user's original free-text request
    pub query: String,
    pub search_depth: SearchDepth,
    pub include_answer: bool,
    pub max_results: i64,
    pub include_domains: Option<Vec<String>>,
    pub include_images: bool,
    pub topic: Topic,
    pub time_range: Option<TimeRange>,
}

impl SearchRequest {
    /// Combine the query, the extracted parameters and the configured flags.
    pub fn new(query: impl Into<String>, params: &SearchParams, settings: &SearchSettings) -> Self {
        Self {
            query: query.into(),
            search_depth: settings.search_depth,
            include_answer: settings.include_answer,
            max_results: params.max_results,
            include_domains: if params.include_domains.is_empty() {
                None
            } else {
                Some(params.include_domains.clone())
            },
            include_images: settings.include_images,
            topic: params.topic,
            time_range: params.time_range,
        }
    }
}

/// Port for the hosted search API
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run one search with the given API key and return the raw response body
    async fn search(
        &self,
        api_key: &str,
        request: &SearchRequest,
    ) -> Result<serde_json::Value, SearchBackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_from_params() {
        let params = SearchParams {
            include_domains: vec!["example.com".to_string()],
            max_results: 3,
            topic: Topic::News,
            time_range: Some(TimeRange::Week),
        };
        let settings = SearchSettings {
            search_depth: SearchDepth::Advanced,
            include_images: true,
            ..Default::default()
        };
        let request = SearchRequest::new("sport news", &params, &settings);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "sport news",
                "search_depth": "advanced",
                "include_answer": false,
                "max_results": 3,
                "include_domains": ["example.com"],
                "include_images": true,
                "topic": "news",
                "time_range": "week"
            })
        );
    }

    #[test]
    fn test_empty_domains_and_time_range_are_null() {
        let request =
            SearchRequest::new("q", &SearchParams::defaults(5), &SearchSettings::default());
        let value = serde_json::to_value(&request).unwrap();
        assert!(value["include_domains"].is_null());
        assert!(value["time_range"].is_null());
        assert_eq!(value["topic"], "general");
        assert_eq!(value["max_results"], 5);
    }
}
