//! Domain layer for tavily-tool
//!
//! This crate contains the pure logic of the Tavily search tool: the settings
//! model, the validated search parameters extracted from LLM output, the
//! defensive model of the search response, and the HTML renderer.
//! It has no dependencies on infrastructure or I/O.
//!
//! # Core Concepts
//!
//! ## Settings
//!
//! [`SearchSettings`] is the host-owned configuration record. The tool only
//! reads it. [`settings_schema()`] describes the same record for hosts that
//! generate an editing form.
//!
//! ## Extraction
//!
//! A free-text request is turned into [`SearchParams`] by the host's language
//! model. The raw model output is untrusted: [`extract_search_params`] parses it
//! in two stages and validates every field on ingest.
//!
//! ## Rendering
//!
//! [`SearchResponse`] is a typed view over the untrusted backend JSON in which
//! every field is optional. [`render_response`] turns it into the chat HTML or
//! the [`NO_RESULTS`] sentinel.

pub mod config;
pub mod core;
pub mod prompt;
pub mod search;
pub mod settings;
pub mod tool;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::string::{truncate_chars, truncate_str};
pub use prompt::PromptTemplate;
pub use search::{
    extraction::{ExtractedParams, ExtractionSource, extract_search_params, parse_llm_output},
    params::{SearchParams, TimeRange, Topic},
    render::{CONTENT_PREVIEW_CHARS, NO_RESULTS, RenderOptions, render_html, render_response},
    response::{ImageGallery, SearchHit, SearchResponse},
};
pub use settings::{
    SearchDepth, SearchSettings, SettingsError, TAVILY_API_KEY_ENV,
    schema::{FieldKind, SettingField, SettingsSchema, settings_schema},
};
pub use tool::{
    TAVILY_SEARCH, ToolDefinition, ToolParameter, tavily_search_definition,
};
