//! Typed, defensive view over the search backend's JSON response.
//!
//! The response is untrusted input. Every field is optional and a field of
//! the wrong type reads as absent instead of failing the parse.

use serde_json::{Map, Value};

/// Resolved image URLs from one `images` list.
///
/// Present whenever the raw list was non-empty, even if no entry resolved
/// to a usable URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageGallery {
    pub urls: Vec<String>,
}

impl ImageGallery {
    /// Parse an `images` value. Entries may be URL strings or objects with a
    /// string `url`; empty URLs and other shapes are skipped.
    pub fn from_value(value: Option<&Value>) -> Option<Self> {
        let entries = value?.as_array().filter(|a| !a.is_empty())?;
        let urls = entries
            .iter()
            .filter_map(|entry| match entry {
                Value::String(url) => Some(url.as_str()),
                Value::Object(obj) => obj.get("url").and_then(Value::as_str),
                _ => None,
            })
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect();
        Some(Self { urls })
    }
}

/// One search result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHit {
    pub title: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub images: Option<ImageGallery>,
}

impl SearchHit {
    /// Parse one entry of `results`. A non-object entry yields a hit with
    /// every field absent so that display numbering stays aligned.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        Self {
            title: text_field(obj, "title"),
            content: text_field(obj, "content"),
            url: text_field(obj, "url"),
            images: ImageGallery::from_value(obj.get("images")),
        }
    }
}

/// The parts of a search response the renderer uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    /// Generated answer, when non-empty
    pub answer: Option<String>,
    /// Results in backend order; never empty
    pub results: Vec<SearchHit>,
    /// Top-level images
    pub images: Option<ImageGallery>,
}

impl SearchResponse {
    /// Parse a backend response.
    ///
    /// Returns `None` when the value is not an object or carries no
    /// non-empty `results` list; callers report that as "no results".
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let results = obj
            .get("results")?
            .as_array()
            .filter(|r| !r.is_empty())?
            .iter()
            .map(SearchHit::from_value)
            .collect();

        Some(Self {
            answer: obj
                .get("answer")
                .and_then(Value::as_str)
                .filter(|a| !a.is_empty())
                .map(str::to_string),
            results,
            images: ImageGallery::from_value(obj.get("images")),
        })
    }
}

/// Strings are kept; numbers and booleans are rendered as text; anything
/// else, including `null`, is absent.
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
