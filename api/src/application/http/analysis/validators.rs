use rentwise_core::domain::location_analysis::Language;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeLocationRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(
        required(message = "address is required"),
        length(min = 1, message = "address must not be empty")
    )]
    #[schema(example = "1 Market St, San Francisco, CA")]
    pub address: Option<String>,

    /// `en`, `zh` or `es`. Anything else is treated as `en`.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schema(example = "en")]
    pub language: Option<String>,
}

impl AnalyzeLocationRequest {
    pub fn language(&self) -> Language {
        self.language
            .as_deref()
            .map(Language::from_code)
            .unwrap_or_default()
    }
}

/// Non-string JSON values read as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Some(value),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> AnalyzeLocationRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let request = parse(r#"{"address": "Plaza Mayor, Madrid", "language": "es"}"#);
        assert!(request.validate().is_ok());
        assert_eq!(request.language(), Language::Es);
    }

    #[test]
    fn test_language_defaults_to_english() {
        assert_eq!(parse(r#"{"address": "x"}"#).language(), Language::En);
        assert_eq!(
            parse(r#"{"address": "x", "language": "fr"}"#).language(),
            Language::En
        );
        assert_eq!(
            parse(r#"{"address": "x", "language": 7}"#).language(),
            Language::En
        );
    }

    #[test]
    fn test_missing_or_empty_address_is_invalid() {
        assert!(parse("{}").validate().is_err());
        assert!(parse(r#"{"address": ""}"#).validate().is_err());
        assert!(parse(r#"{"address": null}"#).validate().is_err());
    }

    #[test]
    fn test_non_string_address_reads_as_missing() {
        let request = parse(r#"{"address": 42, "language": "zh"}"#);
        assert!(request.address.is_none());
        assert!(request.validate().is_err());
        assert_eq!(request.language(), Language::Zh);
    }

    #[test]
    fn test_long_address_is_valid() {
        let request = AnalyzeLocationRequest {
            address: Some("Calle Mayor ".repeat(200)),
            language: None,
        };
        assert!(request.validate().is_ok());
    }
}
