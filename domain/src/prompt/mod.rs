//! Prompt domain
//!
//! Templates for the prompts the tool sends to the host's language model.

mod template;

pub use template::PromptTemplate;
