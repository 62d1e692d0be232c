//! Core utilities shared across all domain modules.
//!
//! - [`string`]: character-safe truncation for rendering and log previews

pub mod string;
