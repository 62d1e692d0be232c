//! Tavily search API adapter
//!
//! Implements [`SearchBackend`](tavily_application::SearchBackend) over the
//! hosted `POST /search` endpoint.

mod client;
mod error;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TavilyClient};
pub use error::TavilyError;
