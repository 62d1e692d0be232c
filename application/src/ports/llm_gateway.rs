//! LLM Gateway port
//!
//! Defines the interface for sending a prompt to a language model.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// One prompt in, one text completion out. Implementations (adapters) live
/// in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a single user prompt and return the model's text response
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError>;
}
