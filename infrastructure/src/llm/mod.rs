//! LLM gateway adapters
//!
//! The CLI stands in for a conversational host, so it needs its own way of
//! reaching a model. Any OpenAI-compatible chat-completions server works.

mod openai;

pub use openai::{OpenAiCompatibleGateway, OpenAiGatewayConfig};
