//! Recovery of the parameter object from raw LLM output.
//!
//! Model output is not guaranteed to be well-formed JSON. Parsing runs in
//! two stages:
//!
//! 1. the whole response parsed as a JSON object;
//! 2. the span from the first `{` to the last `}` parsed as a JSON object
//!    (handles prose or code fences around the payload).
//!
//! If both fail, all-default parameters are used.

use super::params::SearchParams;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static JSON_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON span pattern is valid"));

/// Which stage produced the parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    /// The response was a JSON object as-is
    Direct,
    /// A JSON object was found inside surrounding text
    Embedded,
    /// No usable JSON; defaults were substituted
    Defaults,
}

/// Parameters together with how they were obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedParams {
    pub params: SearchParams,
    pub source: ExtractionSource,
}

/// Find the parameter object in raw model output.
///
/// Returns `None` when neither stage yields a JSON object.
pub fn parse_llm_output(raw: &str) -> Option<(Value, ExtractionSource)> {
    if let Ok(value) = serde_json::from_str::<Value>(raw)
        && value.is_object()
    {
        return Some((value, ExtractionSource::Direct));
    }

    let span = JSON_SPAN.find(raw)?;
    match serde_json::from_str::<Value>(span.as_str()) {
        Ok(value) if value.is_object() => Some((value, ExtractionSource::Embedded)),
        _ => None,
    }
}

/// Parse and validate raw model output into [`SearchParams`].
pub fn extract_search_params(raw: &str, default_max_results: u32) -> ExtractedParams {
    match parse_llm_output(raw) {
        Some((value, source)) => ExtractedParams {
            params: SearchParams::from_json(&value, default_max_results),
            source,
        },
        None => ExtractedParams {
            params: SearchParams::defaults(default_max_results),
            source: ExtractionSource::Defaults,
        },
    }
}
