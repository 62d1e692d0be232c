//! Tool settings: the host-owned configuration record.
//!
//! The host loads and persists [`SearchSettings`]; the tool reads a fresh copy
//! on every call and never mutates it. [`schema`] describes the same record as
//! a form for hosts that generate an editing UI.

pub mod schema;

use crate::config::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable consulted when no API key is configured.
pub const TAVILY_API_KEY_ENV: &str = "TAVILY_API_KEY";

/// Default number of results when the host has not configured one.
pub const DEFAULT_MAX_RESULTS: u32 = 5;

/// Errors raised while obtaining settings from the host.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid settings: {0}")]
    Invalid(String),

    #[error("Invalid value for '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

/// Backend quality/latency tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    /// Faster, cheaper search
    #[default]
    Basic,
    /// Slower, more detailed search
    Advanced,
}

impl SearchDepth {
    pub const ALL: [SearchDepth; 2] = [SearchDepth::Basic, SearchDepth::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchDepth::Basic => "basic",
            SearchDepth::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SearchDepth {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(SearchDepth::Basic),
            "advanced" => Ok(SearchDepth::Advanced),
            other => Err(SettingsError::InvalidValue {
                field: "search_depth".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Search tool settings (Value Object).
///
/// `api_key` may be left empty, in which case the key is taken from the
/// [`TAVILY_API_KEY_ENV`] environment variable at call time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Tavily API key (secret)
    #[serde(alias = "tavily_api_key")]
    pub api_key: String,
    /// Default and ceiling for the number of results; must be at least 1
    pub max_results: u32,
    /// Default search depth
    pub search_depth: SearchDepth,
    /// Render result and top-level images
    pub include_images: bool,
    /// Request and render the backend's generated answer
    pub include_answer: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            max_results: DEFAULT_MAX_RESULTS,
            search_depth: SearchDepth::Basic,
            include_images: false,
            include_answer: false,
        }
    }
}

impl SearchSettings {
    /// Parse settings handed over by a host as a JSON object.
    ///
    /// Missing keys take their defaults. Values violating a schema constraint
    /// are rejected with [`SettingsError::Invalid`].
    pub fn from_json(value: serde_json::Value) -> Result<Self, SettingsError> {
        let settings: SearchSettings =
            serde_json::from_value(value).map_err(|e| SettingsError::Invalid(e.to_string()))?;
        if let Some(issue) = settings.validate().into_iter().find(|i| i.is_error()) {
            return Err(SettingsError::Invalid(issue.message));
        }
        Ok(settings)
    }

    /// Resolve the API key to use for this call.
    ///
    /// The configured key wins; when it is empty the `env_lookup` closure is
    /// asked for [`TAVILY_API_KEY_ENV`]. Returns `None` when neither yields a
    /// non-blank key.
    pub fn effective_api_key<F>(&self, env_lookup: F) -> Option<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        if !self.api_key.trim().is_empty() {
            return Some(self.api_key.clone());
        }
        env_lookup(TAVILY_API_KEY_ENV).filter(|key| !key.trim().is_empty())
    }

    /// Validate against the schema constraints.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.max_results < 1 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::BelowMinimum {
                    field: "max_results".to_string(),
                    minimum: 1,
                    value: i64::from(self.max_results),
                },
                "max_results must be at least 1",
            ));
        }
        issues
    }

    /// A copy safe for display, with the API key masked.
    pub fn redacted(&self) -> Self {
        let api_key = if self.api_key.is_empty() {
            String::new()
        } else {
            "********".to_string()
        };
        Self {
            api_key,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_settings() {
        let settings = SearchSettings::default();
        assert!(settings.api_key.is_empty());
        assert_eq!(settings.max_results, 5);
        assert_eq!(settings.search_depth, SearchDepth::Basic);
        assert!(!settings.include_images);
        assert!(!settings.include_answer);
        assert!(settings.validate().is_empty());
    }

    #[test]
    fn test_search_depth_parse() {
        assert_eq!("basic".parse::<SearchDepth>().unwrap(), SearchDepth::Basic);
        assert_eq!(
            "Advanced".parse::<SearchDepth>().unwrap(),
            SearchDepth::Advanced
        );
        assert!("deep".parse::<SearchDepth>().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let settings = SearchSettings::from_json(json!({
            "tavily_api_key": "tvly-123",
            "search_depth": "advanced",
            "include_answer": true
        }))
        .unwrap();
        assert_eq!(settings.api_key, "tvly-123");
        assert_eq!(settings.max_results, 5);
        assert_eq!(settings.search_depth, SearchDepth::Advanced);
        assert!(settings.include_answer);
    }

    #[test]
    fn test_from_json_rejects_zero_max_results() {
        let err = SearchSettings::from_json(json!({ "max_results": 0 })).unwrap_err();
        assert!(err.to_string().contains("max_results"));
    }

    #[test]
    fn test_from_json_rejects_unknown_depth() {
        assert!(SearchSettings::from_json(json!({ "search_depth": "deep" })).is_err());
    }

    #[test]
    fn test_effective_api_key_prefers_configured() {
        let settings = SearchSettings {
            api_key: "configured".to_string(),
            ..Default::default()
        };
        let key = settings.effective_api_key(|_| Some("from-env".to_string()));
        assert_eq!(key.as_deref(), Some("configured"));
    }

    #[test]
    fn test_effective_api_key_falls_back_to_env() {
        let settings = SearchSettings::default();
        let key = settings.effective_api_key(|name| {
            assert_eq!(name, TAVILY_API_KEY_ENV);
            Some("from-env".to_string())
        });
        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_effective_api_key_missing_everywhere() {
        let settings = SearchSettings::default();
        assert!(settings.effective_api_key(|_| None).is_none());
        assert!(settings.effective_api_key(|_| Some("  ".to_string())).is_none());
    }

    #[test]
    fn test_redacted_masks_key() {
        let settings = SearchSettings {
            api_key: "tvly-secret".to_string(),
            ..Default::default()
        };
        let redacted = settings.redacted();
        assert_eq!(redacted.api_key, "********");
        assert_eq!(redacted.max_results, settings.max_results);
        assert!(SearchSettings::default().redacted().api_key.is_empty());
    }
}
