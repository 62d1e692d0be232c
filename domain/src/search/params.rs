//! Search parameters extracted from LLM output (Value Object).
//!
//! The language model is asked for a JSON object, but nothing it returns is
//! trusted until each field has passed its own check. A bad field resets to
//! its default; it never invalidates the others.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Backend result category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    #[default]
    General,
    News,
    Finance,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::General => "general",
            Topic::News => "news",
            Topic::Finance => "finance",
        }
    }

    /// Exact, case-sensitive match against the backend vocabulary.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "general" => Some(Topic::General),
            "news" => Some(Topic::News),
            "finance" => Some(Topic::Finance),
            _ => None,
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Backend recency filter.
///
/// The backend accepts both the full word and its single-letter abbreviation;
/// the token the model chose is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Year,
    /// `d`
    DayShort,
    /// `w`
    WeekShort,
    /// `m`
    MonthShort,
    /// `y`
    YearShort,
}

impl TimeRange {
    /// Every accepted token, in prompt order.
    pub const TOKENS: [&'static str; 8] = ["day", "week", "month", "year", "d", "w", "m", "y"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
            TimeRange::DayShort => "d",
            TimeRange::WeekShort => "w",
            TimeRange::MonthShort => "m",
            TimeRange::YearShort => "y",
        }
    }

    /// Exact, case-sensitive match against [`TimeRange::TOKENS`].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "day" => Some(TimeRange::Day),
            "week" => Some(TimeRange::Week),
            "month" => Some(TimeRange::Month),
            "year" => Some(TimeRange::Year),
            "d" => Some(TimeRange::DayShort),
            "w" => Some(TimeRange::WeekShort),
            "m" => Some(TimeRange::MonthShort),
            "y" => Some(TimeRange::YearShort),
            _ => None,
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for TimeRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Validated search parameters for one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    /// Restrict results to these domains; empty means unrestricted
    pub include_domains: Vec<String>,
    /// Never above the configured default, but not raised when lower
    pub max_results: i64,
    pub topic: Topic,
    /// `None` means no recency filter
    pub time_range: Option<TimeRange>,
}

impl SearchParams {
    /// All-default parameters for the configured result ceiling.
    pub fn defaults(default_max_results: u32) -> Self {
        Self {
            include_domains: Vec::new(),
            max_results: i64::from(default_max_results),
            topic: Topic::General,
            time_range: None,
        }
    }

    /// Build parameters from an untrusted JSON value, field by field.
    ///
    /// Anything other than a JSON object yields [`SearchParams::defaults`].
    pub fn from_json(value: &Value, default_max_results: u32) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::defaults(default_max_results);
        };

        Self {
            include_domains: coerce_domains(obj.get("include_domains")),
            max_results: coerce_max_results(obj.get("max_results"), default_max_results),
            topic: obj
                .get("topic")
                .and_then(Value::as_str)
                .and_then(Topic::parse)
                .unwrap_or_default(),
            time_range: obj
                .get("time_range")
                .and_then(Value::as_str)
                .and_then(TimeRange::parse),
        }
    }
}

/// Lists are kept; a truthy scalar becomes a one-element list.
fn coerce_domains(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f != 0.0) => vec![n.to_string()],
        _ => Vec::new(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerce to an integer and cap at the configured default.
///
/// Uncoercible values fall back to the default. The cap is ceiling-only:
/// the model may lower the count but never raise it.
fn coerce_max_results(value: Option<&Value>, default_max_results: u32) -> i64 {
    let ceiling = i64::from(default_max_results);
    match value.and_then(coerce_int) {
        Some(n) => n.min(ceiling),
        None => ceiling,
    }
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let params = SearchParams::defaults(5);
        assert!(params.include_domains.is_empty());
        assert_eq!(params.max_results, 5);
        assert_eq!(params.topic, Topic::General);
        assert_eq!(params.time_range, None);
    }

    #[test]
    fn test_full_valid_object() {
        let params = SearchParams::from_json(
            &json!({
                "include_domains": ["example.com"],
                "max_results": 3,
                "topic": "general",
                "time_range": null
            }),
            5,
        );
        assert_eq!(params.include_domains, vec!["example.com".to_string()]);
        assert_eq!(params.max_results, 3);
        assert_eq!(params.topic, Topic::General);
        assert_eq!(params.time_range, None);
    }

    #[test]
    fn test_non_object_yields_defaults() {
        assert_eq!(SearchParams::from_json(&json!([1, 2]), 7), SearchParams::defaults(7));
        assert_eq!(SearchParams::from_json(&json!("x"), 7), SearchParams::defaults(7));
    }

    #[test]
    fn test_max_results_at_or_below_default_kept() {
        for n in [1, 2, 4, 5] {
            let params = SearchParams::from_json(&json!({ "max_results": n }), 5);
            assert_eq!(params.max_results, n);
        }
    }

    #[test]
    fn test_max_results_above_default_clamped() {
        for n in [6, 10, 50, 1_000_000] {
            let params = SearchParams::from_json(&json!({ "max_results": n }), 5);
            assert_eq!(params.max_results, 5);
        }
        let huge = SearchParams::from_json(&json!({ "max_results": u64::MAX }), 5);
        assert_eq!(huge.max_results, 5);
    }

    #[test]
    fn test_max_results_ceiling_only() {
        // Lower values pass through untouched, even below one
        let params = SearchParams::from_json(&json!({ "max_results": 0 }), 5);
        assert_eq!(params.max_results, 0);
        let params = SearchParams::from_json(&json!({ "max_results": -2 }), 5);
        assert_eq!(params.max_results, -2);
    }

    #[test]
    fn test_max_results_coercion() {
        assert_eq!(SearchParams::from_json(&json!({ "max_results": "3" }), 5).max_results, 3);
        assert_eq!(SearchParams::from_json(&json!({ "max_results": " 4 " }), 5).max_results, 4);
        assert_eq!(SearchParams::from_json(&json!({ "max_results": 2.9 }), 5).max_results, 2);
        assert_eq!(SearchParams::from_json(&json!({ "max_results": true }), 5).max_results, 1);
    }

    #[test]
    fn test_max_results_non_numeric_resets_to_default() {
        for value in [json!("ten"), json!(null), json!([3]), json!({"n": 3}), json!("2.5")] {
            let params = SearchParams::from_json(&json!({ "max_results": value }), 5);
            assert_eq!(params.max_results, 5);
        }
        let missing = SearchParams::from_json(&json!({}), 8);
        assert_eq!(missing.max_results, 8);
    }

    #[test]
    fn test_topic_validation() {
        assert_eq!(SearchParams::from_json(&json!({ "topic": "news" }), 5).topic, Topic::News);
        assert_eq!(
            SearchParams::from_json(&json!({ "topic": "finance" }), 5).topic,
            Topic::Finance
        );
        for bad in [json!("sports"), json!("News"), json!(""), json!(3), json!(null)] {
            let params = SearchParams::from_json(&json!({ "topic": bad }), 5);
            assert_eq!(params.topic, Topic::General);
        }
    }

    #[test]
    fn test_time_range_vocabulary() {
        for token in TimeRange::TOKENS {
            let params = SearchParams::from_json(&json!({ "time_range": token }), 5);
            assert_eq!(params.time_range.map(|t| t.as_str()), Some(token));
        }
    }

    #[test]
    fn test_time_range_outside_vocabulary_absent() {
        for bad in [json!("5 days"), json!("settimana"), json!("Week"), json!(""), json!(7)] {
            let params = SearchParams::from_json(&json!({ "time_range": bad }), 5);
            assert_eq!(params.time_range, None);
        }
    }

    #[test]
    fn test_domains_scalar_becomes_singleton() {
        let params = SearchParams::from_json(&json!({ "include_domains": "apa.org" }), 5);
        assert_eq!(params.include_domains, vec!["apa.org".to_string()]);
    }

    #[test]
    fn test_domains_falsy_becomes_empty() {
        for falsy in [json!(""), json!(null), json!(false), json!(0), json!([])] {
            let params = SearchParams::from_json(&json!({ "include_domains": falsy }), 5);
            assert!(params.include_domains.is_empty());
        }
    }

    #[test]
    fn test_domains_list_keeps_order() {
        let params = SearchParams::from_json(
            &json!({ "include_domains": ["nasa.gov", "esa.int", null] }),
            5,
        );
        assert_eq!(
            params.include_domains,
            vec!["nasa.gov".to_string(), "esa.int".to_string()]
        );
    }

    #[test]
    fn test_bad_field_does_not_affect_others() {
        let params = SearchParams::from_json(
            &json!({
                "include_domains": ["jstor.org"],
                "max_results": "lots",
                "topic": "history",
                "time_range": "m"
            }),
            5,
        );
        assert_eq!(params.include_domains, vec!["jstor.org".to_string()]);
        assert_eq!(params.max_results, 5);
        assert_eq!(params.topic, Topic::General);
        assert_eq!(params.time_range, Some(TimeRange::MonthShort));
    }

    #[test]
    fn test_serialize_tokens() {
        let params = SearchParams {
            include_domains: vec![],
            max_results: 2,
            topic: Topic::News,
            time_range: Some(TimeRange::WeekShort),
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["topic"], "news");
        assert_eq!(value["time_range"], "w");
    }
}
