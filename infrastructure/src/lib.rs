//! Infrastructure layer for tavily-tool
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod context;
pub mod llm;
pub mod tavily;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileLlmConfig, FileTavilyConfig};
pub use context::{HostToolContext, SettingsSource};
pub use llm::{OpenAiCompatibleGateway, OpenAiGatewayConfig};
pub use tavily::{TavilyClient, TavilyError};
