//! Application layer for tavily-tool
//!
//! This crate contains the web search use case and the port definitions it
//! is wired through. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    search_backend::{SearchBackend, SearchBackendError, SearchRequest},
    tool_context::ToolContext,
};
pub use use_cases::web_search::{EnvLookup, WebSearchError, WebSearchUseCase};
