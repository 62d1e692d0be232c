//! Prompt templates for parameter extraction

use crate::search::params::TimeRange;

/// Templates for generating prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking the model to turn a free-text request into the search
    /// parameter object.
    ///
    /// `default_max_results` is both the ceiling offered to the model and the
    /// default for an unspecified count.
    pub fn search_parameters(query: &str, default_max_results: u32) -> String {
        let tokens = TimeRange::TOKENS
            .iter()
            .map(|t| format!("\"{}\"", t))
            .collect::<Vec<_>>();
        let (words, letters) = tokens.split_at(4);
        let time_ranges = format!("{} or {}", words.join(", "), letters.join(", "));

        format!(
            r#"Extract search parameters from this query: "{query}"

Return must be a JSON object with these keys:
- "include_domains": List of specific websites to search, like ["arxiv.org"]
- "max_results": A number between 1 and {max}, based on the number of results requested by the user.
- "topic": The category of the search, either "general", "news" or "finance"
- "time_range": The time range for results, either {time_ranges}

For any parameter not specified in the query, use these defaults:
- include_domains: [] (empty list)
- max_results: {max}
- topic: "general"
- time_range: null

Important note
- "time_range" must be {time_ranges}, please translate from other languages if necessary.

Respond with the JSON object only."#,
            query = query,
            max = default_max_results,
            time_ranges = time_ranges,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_query_and_ceiling() {
        let prompt = PromptTemplate::search_parameters("find 3 articles about sport", 7);
        assert!(prompt.contains("\"find 3 articles about sport\""));
        assert!(prompt.contains("between 1 and 7"));
        assert!(prompt.contains("- max_results: 7"));
    }

    #[test]
    fn test_prompt_lists_all_keys() {
        let prompt = PromptTemplate::search_parameters("q", 5);
        for key in ["include_domains", "max_results", "topic", "time_range"] {
            assert!(prompt.contains(&format!("\"{}\"", key)), "missing key {}", key);
        }
        assert!(prompt.contains("\"general\", \"news\" or \"finance\""));
    }

    #[test]
    fn test_prompt_time_range_vocabulary() {
        let prompt = PromptTemplate::search_parameters("q", 5);
        assert!(prompt.contains(r#""day", "week", "month", "year" or "d", "w", "m", "y""#));
        assert!(prompt.contains("translate from other languages"));
    }
}
