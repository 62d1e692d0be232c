//! Tool context port
//!
//! The capabilities a host hands to a tool invocation: reading the current
//! settings and invoking the conversation's language model.

use super::llm_gateway::GatewayError;
use async_trait::async_trait;
use tavily_domain::{SearchSettings, SettingsError};

/// Host-provided context for one tool call.
///
/// Settings are read fresh on every call; the tool never writes them back.
#[async_trait]
pub trait ToolContext: Send + Sync {
    /// Load the effective settings for this call
    fn load_settings(&self) -> Result<SearchSettings, SettingsError>;

    /// Invoke the contextual language model with a single prompt
    async fn llm(&self, prompt: &str) -> Result<String, GatewayError>;
}
