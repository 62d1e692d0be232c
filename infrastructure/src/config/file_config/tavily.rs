//! Tavily configuration from TOML (`[tavily]` section)

use crate::tavily::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use tavily_domain::{ConfigIssue, ConfigIssueCode, SearchDepth, SearchSettings};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTavilyConfig {
    /// Tavily API key. Empty means "use `TAVILY_API_KEY`".
    pub api_key: String,
    /// Upper bound and default for results per search
    pub max_results: u32,
    /// "basic" or "advanced"
    pub search_depth: String,
    pub include_images: bool,
    pub include_answer: bool,
    /// API root (override for proxies and tests)
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for FileTavilyConfig {
    fn default() -> Self {
        let settings = SearchSettings::default();
        Self {
            api_key: settings.api_key,
            max_results: settings.max_results,
            search_depth: settings.search_depth.as_str().to_string(),
            include_images: settings.include_images,
            include_answer: settings.include_answer,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FileTavilyConfig {
    /// Parse `search_depth`, falling back to `basic` with a warning.
    pub fn parse_search_depth(&self) -> (SearchDepth, Vec<ConfigIssue>) {
        match self.search_depth.parse::<SearchDepth>() {
            Ok(depth) => (depth, Vec::new()),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "tavily.search_depth".to_string(),
                        value: self.search_depth.clone(),
                        valid_values: SearchDepth::ALL
                            .iter()
                            .map(|d| d.as_str().to_string())
                            .collect(),
                    },
                    format!(
                        "tavily.search_depth: unknown value '{}', falling back to 'basic'",
                        self.search_depth
                    ),
                );
                (SearchDepth::default(), vec![issue])
            }
        }
    }

    /// Build the tool settings this section describes.
    pub fn to_settings(&self) -> SearchSettings {
        SearchSettings {
            api_key: self.api_key.clone(),
            max_results: self.max_results,
            search_depth: self.parse_search_depth().0,
            include_images: self.include_images,
            include_answer: self.include_answer,
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_search_depth().1;
        issues.extend(self.to_settings().validate());
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::BelowMinimum {
                    field: "tavily.timeout_secs".to_string(),
                    minimum: 1,
                    value: 0,
                },
                "tavily.timeout_secs cannot be 0",
            ));
        }
        issues
    }
}
