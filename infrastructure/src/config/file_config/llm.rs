//! LLM configuration from TOML (`[llm]` section)
//!
//! Only used by the command-line front end, which has no host model to
//! borrow and talks to an OpenAI-compatible server instead.

use crate::llm::OpenAiGatewayConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tavily_domain::{ConfigIssue, ConfigIssueCode};

/// OpenAI-compatible chat-completions settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Server root, e.g. `http://localhost:11434` for Ollama
    pub base_url: String,
    pub model: String,
    /// Direct API key (not recommended, use `api_key_env` instead)
    pub api_key: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: u64,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        let gateway = OpenAiGatewayConfig::default();
        Self {
            base_url: gateway.base_url,
            model: gateway.model,
            api_key: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: gateway.temperature,
            max_tokens: gateway.max_tokens,
            timeout_secs: gateway.timeout.as_secs(),
        }
    }
}

impl FileLlmConfig {
    /// The configured key, or the value of `api_key_env`.
    pub fn resolve_api_key<F>(&self, env_lookup: F) -> Option<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match &self.api_key {
            Some(key) if !key.trim().is_empty() => Some(key.clone()),
            _ => env_lookup(&self.api_key_env).filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn to_gateway_config<F>(&self, env_lookup: F) -> OpenAiGatewayConfig
    where
        F: FnOnce(&str) -> Option<String>,
    {
        OpenAiGatewayConfig {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            api_key: self.resolve_api_key(env_lookup),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingValue {
                    field: "llm.model".to_string(),
                },
                "llm.model cannot be empty",
            ));
        }
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::BelowMinimum {
                    field: "llm.timeout_secs".to_string(),
                    minimum: 1,
                    value: 0,
                },
                "llm.timeout_secs cannot be 0",
            ));
        }
        issues
    }
}
