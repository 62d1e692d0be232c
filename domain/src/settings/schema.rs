//! Declarative settings schema for host-side form generation.

use super::{DEFAULT_MAX_RESULTS, SearchDepth};
use serde::Serialize;
use serde_json::{Value, json};

/// Input kind and constraints of a single setting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text that must be masked in the UI
    Secret,
    /// Whole number with a lower bound
    Integer { minimum: i64 },
    /// One value out of a closed vocabulary
    Enum { values: Vec<String> },
    Boolean,
}

/// One editable setting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingField {
    pub key: String,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub default: Value,
}

impl SettingField {
    fn new(
        key: &str,
        title: &str,
        description: &str,
        kind: FieldKind,
        default: Value,
    ) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            kind,
            default,
        }
    }
}

/// The full settings form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsSchema {
    pub title: String,
    pub fields: Vec<SettingField>,
}

impl SettingsSchema {
    pub fn field(&self, key: &str) -> Option<&SettingField> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Defaults of every field as one JSON object, keyed like
    /// [`SearchSettings`](super::SearchSettings).
    pub fn defaults(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|f| (f.key.clone(), f.default.clone()))
                .collect(),
        )
    }
}

/// Schema of [`SearchSettings`](super::SearchSettings).
pub fn settings_schema() -> SettingsSchema {
    SettingsSchema {
        title: "Tavily Search Settings".to_string(),
        fields: vec![
            SettingField::new(
                "api_key",
                "Tavily API Key",
                "Your Tavily API key. Get one at https://tavily.com",
                FieldKind::Secret,
                json!(""),
            ),
            SettingField::new(
                "max_results",
                "Max Results Retrieved",
                "Default number of search results to return",
                FieldKind::Integer { minimum: 1 },
                json!(DEFAULT_MAX_RESULTS),
            ),
            SettingField::new(
                "search_depth",
                "Search Depth",
                "Default search depth: 'basic' (faster) or 'advanced' (more detailed)",
                FieldKind::Enum {
                    values: SearchDepth::ALL
                        .iter()
                        .map(|d| d.as_str().to_string())
                        .collect(),
                },
                json!(SearchDepth::default().as_str()),
            ),
            SettingField::new(
                "include_images",
                "Include Images",
                "Whether to include images in the search results",
                FieldKind::Boolean,
                json!(false),
            ),
            SettingField::new(
                "include_answer",
                "Include Answer",
                "Whether to include an AI-generated answer based on the search results",
                FieldKind::Boolean,
                json!(false),
            ),
        ],
    }
}
