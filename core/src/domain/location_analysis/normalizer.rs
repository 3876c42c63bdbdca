//! Repairs raw model output into an [`AnalysisResult`].
//!
//! The pipeline has three stages: [`strip_code_fence`] removes markdown fences,
//! [`parse_model_output`] parses the remaining text and reports failure as a
//! value, and [`normalize_analysis`] turns any JSON value into a complete
//! result. Only the parse stage can fail; normalization always succeeds.

use serde_json::Value;

use crate::domain::location_analysis::{
    entities::{AnalysisResult, Category, DEFAULT_RATING, MAX_RATING, MIN_RATING, Rating},
    fallback::fallback_description,
    value_objects::Language,
};

const FENCE: &str = "```";

/// Outcome of parsing the text returned by the model.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedOutput {
    Json(Value),
    Malformed(String),
}

/// Strips a leading fence opener (with an optional info string such as
/// `json`) and a trailing fence closer.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        text = match rest.find('\n') {
            // The opener line is dropped only when it is a bare info string.
            Some(newline) if !rest[..newline].contains('{') => &rest[newline + 1..],
            _ => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        };
    }

    if let Some(rest) = text.trim_end().strip_suffix(FENCE) {
        text = rest;
    }

    text.trim()
}

pub fn parse_model_output(raw: &str) -> ParsedOutput {
    match serde_json::from_str::<Value>(strip_code_fence(raw)) {
        Ok(value) => ParsedOutput::Json(value),
        Err(e) => ParsedOutput::Malformed(e.to_string()),
    }
}

/// Coerces a rating the way JavaScript's `Number()` does: `null`, `false`
/// and blank strings read as 0, `true` as 1, numeric strings are parsed and a
/// single-element array reads as its element. Missing, non-numeric and
/// non-finite values yield the default rating. The result is rounded and
/// clamped to `MIN_RATING..=MAX_RATING`.
pub fn clamp_rating(value: Option<&Value>) -> u8 {
    match value.and_then(coerce_number) {
        Some(n) if n.is_finite() => n.round().clamp(MIN_RATING as f64, MAX_RATING as f64) as u8,
        _ => DEFAULT_RATING,
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => coerce_str(s),
        Value::Array(items) => match items.as_slice() {
            [] => Some(0.0),
            [Value::Null] => Some(0.0),
            [Value::Bool(_)] => None,
            [item] => coerce_number(item),
            _ => None,
        },
        Value::Object(_) => None,
    }
}

fn coerce_str(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    s.parse::<f64>().ok()
}

fn normalize_description(value: Option<&Value>, category: Category, language: Language) -> String {
    match value.and_then(Value::as_str).map(str::trim) {
        Some(description) if !description.is_empty() => description.to_string(),
        _ => fallback_description(category, language).to_string(),
    }
}

fn normalize_rating(raw: &Value, category: Category, language: Language) -> Rating {
    // A missing or non-object category reads as an empty object.
    let entry = raw.get(category.key());

    Rating {
        rating: clamp_rating(entry.and_then(|e| e.get("rating"))),
        description: normalize_description(
            entry.and_then(|e| e.get("description")),
            category,
            language,
        ),
    }
}

/// Builds a complete analysis from any JSON value, substituting localized
/// fallback text for missing or blank descriptions.
pub fn normalize_analysis(raw: &Value, language: Language) -> AnalysisResult {
    AnalysisResult {
        safety: normalize_rating(raw, Category::Safety, language),
        accessibility: normalize_rating(raw, Category::Accessibility, language),
        convenience: normalize_rating(raw, Category::Convenience, language),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::location_analysis::fallback::fallback_analysis;

    fn assert_well_formed(result: &AnalysisResult) {
        for category in Category::ALL {
            let rating = result.get(category);
            assert!((MIN_RATING..=MAX_RATING).contains(&rating.rating));
            assert!(!rating.description.is_empty());
            assert_eq!(rating.description, rating.description.trim());
        }
    }

    #[test]
    fn test_strip_code_fence_with_language_tag() {
        let raw = "```json\n{\"safety\": {}}\n```";
        assert_eq!(strip_code_fence(raw), "{\"safety\": {}}");
    }

    #[test]
    fn test_strip_code_fence_without_tag_or_newline() {
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```json {\"a\": 1}```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_code_fence_keeps_json_on_opener_line() {
        let raw = "```{\"safety\":{\"rating\":4}}\n```";
        assert_eq!(strip_code_fence(raw), "{\"safety\":{\"rating\":4}}");
        assert_eq!(
            parse_model_output("```json {\"a\": 1}\n```"),
            ParsedOutput::Json(json!({"a": 1}))
        );
    }

    #[test]
    fn test_strip_code_fence_trailing_only() {
        assert_eq!(strip_code_fence("{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn test_parse_reports_malformed_output() {
        assert!(matches!(
            parse_model_output("Sorry, I cannot help with that."),
            ParsedOutput::Malformed(_)
        ));
        assert!(matches!(parse_model_output(""), ParsedOutput::Malformed(_)));
    }

    #[test]
    fn test_parse_fenced_output() {
        let parsed = parse_model_output("```json\n{\"safety\": {\"rating\": 4}}\n```");
        assert_eq!(parsed, ParsedOutput::Json(json!({"safety": {"rating": 4}})));
    }

    #[test]
    fn test_parse_null_is_not_malformed() {
        assert_eq!(parse_model_output("null"), ParsedOutput::Json(Value::Null));
    }

    #[test]
    fn test_clamp_rating() {
        assert_eq!(clamp_rating(Some(&json!(7.8))), 5);
        assert_eq!(clamp_rating(Some(&json!("oops"))), 3);
        assert_eq!(clamp_rating(Some(&json!(0))), 1);
        assert_eq!(clamp_rating(Some(&json!(-12))), 1);
        assert_eq!(clamp_rating(Some(&json!(2.5))), 3);
        assert_eq!(clamp_rating(Some(&json!(2.49))), 2);
        assert_eq!(clamp_rating(Some(&json!(" 4 "))), 4);
        assert_eq!(clamp_rating(Some(&json!("1e1"))), 5);
        assert_eq!(clamp_rating(Some(&json!("NaN"))), 3);
        assert_eq!(clamp_rating(Some(&json!("inf"))), 3);
        assert_eq!(clamp_rating(Some(&json!(u64::MAX))), 5);
        assert_eq!(clamp_rating(Some(&json!({ "value": 4 }))), 3);
        assert_eq!(clamp_rating(None), 3);
    }

    #[test]
    fn test_clamp_rating_coerces_like_number() {
        assert_eq!(clamp_rating(Some(&Value::Null)), 1);
        assert_eq!(clamp_rating(Some(&json!(""))), 1);
        assert_eq!(clamp_rating(Some(&json!("   "))), 1);
        assert_eq!(clamp_rating(Some(&json!(false))), 1);
        assert_eq!(clamp_rating(Some(&json!(true))), 1);
        assert_eq!(clamp_rating(Some(&json!([4]))), 4);
        assert_eq!(clamp_rating(Some(&json!(["4.6"]))), 5);
        assert_eq!(clamp_rating(Some(&json!([[2]]))), 2);
        assert_eq!(clamp_rating(Some(&json!([]))), 1);
        assert_eq!(clamp_rating(Some(&json!([null]))), 1);
        assert_eq!(clamp_rating(Some(&json!([true]))), 3);
        assert_eq!(clamp_rating(Some(&json!([4, 5]))), 3);
        assert_eq!(clamp_rating(Some(&json!("Infinity"))), 3);
    }

    #[test]
    fn test_null_and_blank_ratings_normalize_to_minimum() {
        let raw = json!({
            "safety": { "rating": null },
            "accessibility": { "rating": "" },
            "convenience": { "rating": false }
        });

        let result = normalize_analysis(&raw, Language::En);

        assert_eq!(result.safety.rating, 1);
        assert_eq!(result.accessibility.rating, 1);
        assert_eq!(result.convenience.rating, 1);
    }

    #[test]
    fn test_empty_inputs_equal_fallback() {
        for language in Language::SUPPORTED {
            let expected = fallback_analysis(language);
            assert_eq!(normalize_analysis(&json!({}), language), expected);
            assert_eq!(normalize_analysis(&Value::Null, language), expected);
            assert_eq!(normalize_analysis(&json!([1, 2, 3]), language), expected);
            assert_eq!(normalize_analysis(&json!("text"), language), expected);
        }
    }

    #[test]
    fn test_valid_output_is_kept_and_trimmed() {
        let raw = json!({
            "safety": { "rating": 4, "description": "  Quiet residential area.  " },
            "accessibility": { "rating": 5, "description": "Two metro lines nearby." },
            "convenience": { "rating": 2, "description": "Few grocery stores." }
        });

        let result = normalize_analysis(&raw, Language::En);

        assert_eq!(result.safety.rating, 4);
        assert_eq!(result.safety.description, "Quiet residential area.");
        assert_eq!(result.accessibility.rating, 5);
        assert_eq!(result.convenience.rating, 2);
        assert_eq!(result.convenience.description, "Few grocery stores.");
    }

    #[test]
    fn test_blank_description_uses_localized_fallback() {
        let raw = json!({
            "accessibility": { "rating": 4, "description": "  " }
        });

        let result = normalize_analysis(&raw, Language::Zh);

        assert_eq!(result.accessibility.rating, 4);
        assert_eq!(
            result.accessibility.description,
            fallback_description(Category::Accessibility, Language::Zh)
        );
    }

    #[test]
    fn test_non_string_description_uses_fallback() {
        let raw = json!({ "safety": { "rating": 2, "description": 42 } });

        let result = normalize_analysis(&raw, Language::Es);

        assert_eq!(result.safety.rating, 2);
        assert_eq!(
            result.safety.description,
            fallback_description(Category::Safety, Language::Es)
        );
    }

    #[test]
    fn test_categories_are_normalized_independently() {
        let raw = json!({
            "safety": { "rating": 7.8, "description": "Busy but safe." },
            "accessibility": "not an object",
            "convenience": { "rating": "oops" }
        });

        let result = normalize_analysis(&raw, Language::En);

        assert_eq!(result.safety.rating, 5);
        assert_eq!(result.safety.description, "Busy but safe.");
        assert_eq!(result.accessibility, fallback_analysis(Language::En).accessibility);
        assert_eq!(result.convenience.rating, 3);
        assert_eq!(
            result.convenience.description,
            fallback_description(Category::Convenience, Language::En)
        );
    }

    #[test]
    fn test_output_is_always_well_formed() {
        let inputs = [
            json!({}),
            Value::Null,
            json!(12),
            json!({ "safety": null, "accessibility": [], "convenience": {} }),
            json!({ "safety": { "rating": -0.4, "description": "\n\t" } }),
            json!({ "safety": { "rating": 1e308 }, "convenience": { "rating": "5.5" } }),
            json!({ "accessibility": { "rating": { "value": 4 }, "description": ["x"] } }),
        ];

        for raw in &inputs {
            for language in Language::SUPPORTED {
                assert_well_formed(&normalize_analysis(raw, language));
            }
        }
    }

    #[test]
    fn test_normalization_is_deterministic_and_idempotent() {
        let raw = json!({
            "safety": { "rating": 3.6, "description": " Mostly calm. " },
            "accessibility": { "rating": "9" }
        });

        let first = normalize_analysis(&raw, Language::Es);
        let second = normalize_analysis(&raw, Language::Es);
        assert_eq!(first, second);

        let reparsed = serde_json::to_value(&first).unwrap();
        assert_eq!(normalize_analysis(&reparsed, Language::Es), first);
    }
}
