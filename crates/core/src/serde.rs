//! Serde helper functions for query strings and stored rows.
//!
//! Query strings arrive as text, so empty values like `?category=` must be
//! treated as absent filters. Rows coming back from relational backends may
//! carry NULL in optional text columns.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional boolean flag, treating empty strings as None.
/// Accepts: true, false, 1, 0 (case-insensitive)
pub fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean flag: {other}"
            ))),
        },
        _ => Ok(None),
    }
}

/// Deserialize a string that may be null, mapping null to the empty string.
pub fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_bool")]
        bool_field: Option<bool>,
        #[serde(default, deserialize_with = "deserialize_null_as_empty")]
        text_field: String,
    }

    #[test]
    fn test_deserialize_optional_string_empty() {
        let json = r#"{"string_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_whitespace() {
        let json = r#"{"string_field": "   "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_value() {
        let json = r#"{"string_field": "projects"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, Some("projects".to_string()));
    }

    #[test]
    fn test_deserialize_optional_bool_values() {
        let cases = [
            ("true", Some(true)),
            ("TRUE", Some(true)),
            ("1", Some(true)),
            ("false", Some(false)),
            ("0", Some(false)),
            ("", None),
        ];
        for (raw, expected) in cases {
            let json = format!(r#"{{"bool_field": "{raw}"}}"#);
            let result: TestStruct = serde_json::from_str(&json).unwrap();
            assert_eq!(result.bool_field, expected, "input {raw:?}");
        }
    }

    #[test]
    fn test_deserialize_optional_bool_invalid() {
        let json = r#"{"bool_field": "maybe"}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_null_as_empty() {
        let json = r#"{"text_field": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.text_field, "");
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.string_field, None);
        assert_eq!(result.bool_field, None);
        assert_eq!(result.text_field, "");
    }
}
