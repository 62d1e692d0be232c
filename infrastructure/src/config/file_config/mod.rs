//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain types on demand.

mod llm;
mod tavily;

pub use llm::FileLlmConfig;
pub use tavily::FileTavilyConfig;

use serde::{Deserialize, Serialize};
use tavily_domain::{ConfigIssue, Severity};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Search tool settings and Tavily connection
    pub tavily: FileTavilyConfig,
    /// Model used for parameter extraction
    pub llm: FileLlmConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.tavily.validate();
        issues.extend(self.llm.validate());
        issues
    }

    /// Check whether any issues are errors (i.e. fatal).
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Copy with every secret replaced, for display.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        config.tavily.api_key = self.tavily.to_settings().redacted().api_key;
        config.llm.api_key = self.llm.api_key.as_ref().map(|_| "********".to_string());
        config
    }
}
