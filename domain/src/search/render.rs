//! HTML rendering of search results for a chat transcript.
//!
//! Output shape, per result (1-indexed, backend order):
//!
//! ```text
//! <h3>{i}. {title}</h3>
//! <p>{content, truncated to 300 chars + "..."}</p>
//! <p><a href="{url}" target="_blank">{url}</a></p>
//! <div class='images'><img src="{src}" alt="Image" />...</div>   (images enabled)
//! ```
//!
//! An optional answer paragraph comes first and an optional top-level image
//! block comes last.
//!
//! Backend fields are treated as plain text: titles, content and answers are
//! escaped with `encode_text`, URLs with `encode_double_quoted_attribute`.
//! Markup or entities inside backend text are therefore shown literally
//! (`&amp;` in content displays as `&amp;`) instead of being interpreted by
//! the chat. Only the structure around the fields is HTML.

use super::response::{ImageGallery, SearchResponse};
use crate::core::string::truncate_chars;
use serde_json::Value;
use std::fmt::Write;

/// Returned whenever there is nothing to show or anything went wrong.
pub const NO_RESULTS: &str = "no results found";

/// Content longer than this many characters is truncated.
pub const CONTENT_PREVIEW_CHARS: usize = 300;

const DEFAULT_TITLE: &str = "No title";
const DEFAULT_CONTENT: &str = "No content available";
const DEFAULT_URL: &str = "#";

/// Which optional sections to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub include_answer: bool,
    pub include_images: bool,
}

/// Render a raw backend response, or [`NO_RESULTS`] if it has no results.
pub fn render_response(value: &Value, options: RenderOptions) -> String {
    match SearchResponse::from_value(value) {
        Some(response) => render_html(&response, options),
        None => NO_RESULTS.to_string(),
    }
}

/// Render a parsed response as HTML.
pub fn render_html(response: &SearchResponse, options: RenderOptions) -> String {
    let mut html = String::new();

    if options.include_answer
        && let Some(answer) = &response.answer
    {
        let _ = write!(html, "<p>{}</p>", html_escape::encode_text(answer));
    }

    for (i, hit) in response.results.iter().enumerate() {
        let title = hit.title.as_deref().unwrap_or(DEFAULT_TITLE);
        let content = hit.content.as_deref().unwrap_or(DEFAULT_CONTENT);
        let url = hit.url.as_deref().unwrap_or(DEFAULT_URL);

        let _ = write!(html, "<h3>{}. {}</h3>", i + 1, html_escape::encode_text(title));
        let _ = write!(
            html,
            "<p>{}</p>",
            html_escape::encode_text(&truncate_chars(content, CONTENT_PREVIEW_CHARS))
        );
        let _ = write!(
            html,
            "<p><a href=\"{}\" target=\"_blank\">{}</a></p>",
            html_escape::encode_double_quoted_attribute(url),
            html_escape::encode_text(url)
        );

        if options.include_images
            && let Some(gallery) = &hit.images
        {
            render_gallery(&mut html, gallery);
        }
    }

    if options.include_images
        && let Some(gallery) = &response.images
    {
        render_gallery(&mut html, gallery);
    }

    html
}

fn render_gallery(html: &mut String, gallery: &ImageGallery) {
    html.push_str("<div class='images'>");
    for url in &gallery.urls {
        let _ = write!(
            html,
            "<img src=\"{}\" alt=\"Image\" />",
            html_escape::encode_double_quoted_attribute(url)
        );
    }
    html.push_str("</div>");
}
