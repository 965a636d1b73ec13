use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use standard_error::StandardError;

use crate::prelude::Result;

const MAX_REPAIR_PASSES: usize = 5;

lazy_static! {
    static ref ARRAY_TRAILING_COMMA: Regex = Regex::new(r",\s*\]").unwrap();
    static ref OBJECT_TRAILING_COMMA: Regex = Regex::new(r",\s*\}").unwrap();
}

/// Parses a model completion as JSON. Fenced code blocks are stripped and a
/// failed parse gets one bounded trailing-comma repair before giving up; the
/// model is never re-invoked from here.
pub fn parse_model_json(raw: &str) -> Result<Value> {
    let cleaned = strip_fences(raw);
    match serde_json::from_str(cleaned) {
        Ok(value) => Ok(value),
        Err(parse_err) => {
            let repaired = repair_trailing_commas(cleaned);
            serde_json::from_str(&repaired).map_err(|_| {
                tracing::error!("model response is not valid JSON ({}): {}", parse_err, raw);
                StandardError::new("ERR-AI-003: model response is not valid JSON")
            })
        }
    }
}

fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(stripped) = text.strip_prefix("```") {
        text = stripped.strip_prefix("json").unwrap_or(stripped);
        text = text.strip_suffix("```").unwrap_or(text);
    }
    text.trim()
}

/// Removes the first trailing comma before `]` and before `}` per pass,
/// iterating until the text parses, nothing changes, or the pass limit is
/// reached. Already-valid text comes back untouched.
pub fn repair_trailing_commas(input: &str) -> String {
    let mut current = input.to_string();
    for _ in 0..MAX_REPAIR_PASSES {
        let pass = ARRAY_TRAILING_COMMA.replace(&current, "]");
        let pass = OBJECT_TRAILING_COMMA.replace(&pass, "}").into_owned();
        if pass == current {
            break;
        }
        current = pass;
        if serde_json::from_str::<Value>(&current).is_ok() {
            break;
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn test_bare_and_fenced_payloads_parse_identically() {
        let bare = parse_model_json(r#"{"points": 87}"#).unwrap();
        let tagged = parse_model_json("```json\n{\"points\": 87}\n```").unwrap();
        let plain_fence = parse_model_json("```\n{\"points\": 87}\n```").unwrap();
        assert_eq!(bare, json!({"points": 87}));
        assert_eq!(tagged, bare);
        assert_eq!(plain_fence, bare);
    }

    #[test]
    fn test_single_trailing_comma_repaired() {
        let value = parse_model_json(r#"{"skills": ["rust", "go",]}"#).unwrap();
        assert_eq!(value, json!({"skills": ["rust", "go"]}));
    }

    #[test]
    fn test_two_independent_defects_repaired() {
        let value = parse_model_json(r#"{"a": [1, 2,], "b": {"c": 3,}}"#).unwrap();
        assert_eq!(value, json!({"a": [1, 2], "b": {"c": 3}}));
    }

    #[test]
    fn test_repair_is_idempotent_on_valid_json() {
        let valid = r#"{"a": [1, 2], "b": {"c": 3}}"#;
        assert_eq!(repair_trailing_commas(valid), valid);
    }

    #[traced_test]
    #[test]
    fn test_unparseable_output_fails_and_is_logged() {
        let result = parse_model_json("the resume looks great, here you go:");
        assert!(result.is_err());
        assert!(logs_contain("model response is not valid JSON"));
    }
}
