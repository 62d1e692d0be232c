//! Tool domain module
//!
//! How the search tool presents itself to a host: a [`ToolDefinition`] with
//! the name the host dispatches on, the description its reasoning loop reads,
//! example requests in English and Italian, and the `return_direct` flag
//! telling the host to show the output verbatim.

pub mod definition;
pub mod entities;

pub use definition::{TAVILY_SEARCH, tavily_search_definition};
pub use entities::{ToolDefinition, ToolParameter};
