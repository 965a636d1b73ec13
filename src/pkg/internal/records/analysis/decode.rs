//! Fail-closed decode of the analysis response. A malformed score is
//! actively misleading rather than merely incomplete, so any shape
//! violation aborts the request instead of defaulting.

use serde_json::Value;
use standard_error::StandardError;

use super::spec::AnalysisResult;
use crate::prelude::Result;

pub fn decode_analysis(value: &Value) -> Result<AnalysisResult> {
    let points = value["points"]
        .as_i64()
        .ok_or_else(|| StandardError::new("ERR-ANALYSIS-001: points must be an integer"))?;
    if !(0..=100).contains(&points) {
        return Err(StandardError::new(
            "ERR-ANALYSIS-001: points must be between 0 and 100",
        ));
    }
    let positive = bullet_strings(&value["positive"], "positive")?;
    let negative = bullet_strings(&value["negative"], "negative")?;
    Ok(AnalysisResult {
        points,
        positive: clean_bullets(positive),
        negative: clean_bullets(negative),
    })
}

fn bullet_strings(value: &Value, field: &str) -> Result<Vec<String>> {
    let entries = value.as_array().ok_or_else(|| {
        StandardError::new(&format!("ERR-ANALYSIS-001: {} must be an array", field))
    })?;
    entries
        .iter()
        .map(|entry| {
            entry.as_str().map(str::to_string).ok_or_else(|| {
                StandardError::new(&format!(
                    "ERR-ANALYSIS-001: {} entries must be strings",
                    field
                ))
            })
        })
        .collect()
}

/// Bullets render directly in the UI: trimmed, empty ones dropped,
/// capitalized, terminal punctuation enforced. Order is preserved and
/// duplicates are left alone.
fn clean_bullets(entries: Vec<String>) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(present)
        .collect()
}

fn present(entry: &str) -> String {
    let mut chars = entry.chars();
    let mut cleaned = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => return String::new(),
    };
    if !cleaned.ends_with(['.', '!', '?']) {
        cleaned.push('.');
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_valid_points_pass() {
        for points in [0, 85, 100] {
            let value = json!({"points": points, "positive": [], "negative": []});
            assert_eq!(decode_analysis(&value).unwrap().points, points);
        }
    }

    #[test]
    fn test_invalid_points_fail() {
        for points in [json!(-1), json!(101), json!("85"), json!(85.5), json!(null)] {
            let value = json!({"points": points, "positive": [], "negative": []});
            assert!(decode_analysis(&value).is_err(), "points {} should fail", points);
        }
    }

    #[test]
    fn test_non_string_bullet_fails_whole_request() {
        let value = json!({"points": 50, "positive": ["fine", 42], "negative": []});
        assert!(decode_analysis(&value).is_err());
        let value = json!({"points": 50, "positive": "not an array", "negative": []});
        assert!(decode_analysis(&value).is_err());
    }

    #[test]
    fn test_bullets_get_capitalized_and_punctuated() {
        let value = json!({
            "points": 87,
            "positive": ["  good use of metrics", "strong action verbs"],
            "negative": ["too long!", "   ", ""]
        });
        let result = decode_analysis(&value).unwrap();
        assert_eq!(result.points, 87);
        assert_eq!(
            result.positive,
            vec!["Good use of metrics.", "Strong action verbs."]
        );
        assert_eq!(result.negative, vec!["Too long!"]);
    }

    #[test]
    fn test_order_preserved_without_dedup() {
        let value = json!({
            "points": 60,
            "positive": ["clear layout.", "clear layout."],
            "negative": []
        });
        let result = decode_analysis(&value).unwrap();
        assert_eq!(result.positive, vec!["Clear layout.", "Clear layout."]);
    }
}
