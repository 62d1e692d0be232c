//! Search domain, from LLM output to rendered HTML.
//!
//! ```text
//! raw LLM text ──▶ extraction ──▶ SearchParams ──▶ (backend) ──▶ SearchResponse ──▶ render
//! ```
//!
//! - [`params`]: validated-on-ingest parameter value object
//! - [`extraction`]: two-stage JSON recovery from model output
//! - [`response`]: defensive, typed view over the backend response
//! - [`render`]: HTML output and the [`NO_RESULTS`](render::NO_RESULTS) sentinel

pub mod extraction;
pub mod params;
pub mod render;
pub mod response;
