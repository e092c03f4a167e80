//! Serde helper functions for the schedule document format.
//!
//! The source document stores timestamps as local wall-clock strings
//! (`YYYY-MM-DD HH:MM`, no offset) and leaves optional links blank instead of
//! omitting them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Timestamp format used by the schedule document.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a `YYYY-MM-DD HH:MM` timestamp.
pub fn parse_local_datetime(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT)
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM`.
pub fn format_local_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// (De)serializes a `NaiveDateTime` in the document's `YYYY-MM-DD HH:MM` format.
///
/// Use with `#[serde(with = "crate::serde::local_datetime")]`.
pub mod local_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_local_datetime(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_local_datetime(&s).map_err(|e| {
            serde::de::Error::custom(format!(
                "invalid timestamp {s:?} (expected YYYY-MM-DD HH:MM): {e}"
            ))
        })
    }
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(with = "local_datetime")]
        at: NaiveDateTime,
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        link: Option<String>,
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_deserialize_local_datetime() {
        let json = r#"{"at": "2025-06-12 20:00"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.at, at(2025, 6, 12, 20, 0));
    }

    #[test]
    fn test_serialize_local_datetime() {
        let value = TestStruct {
            at: at(2025, 1, 5, 9, 7),
            link: None,
        };
        let json = serde_json::to_string(&value).unwrap();
        assert!(json.contains(r#""at":"2025-01-05 09:07""#));
    }

    #[test]
    fn test_deserialize_local_datetime_rejects_iso() {
        let json = r#"{"at": "2025-06-12T20:00:00"}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_local_datetime_rejects_garbage() {
        let json = r#"{"at": "tomorrow"}"#;
        let err = serde_json::from_str::<TestStruct>(json).unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD HH:MM"));
    }

    #[test]
    fn test_deserialize_optional_string_empty() {
        let json = r#"{"at": "2025-06-12 20:00", "link": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.link, None);
    }

    #[test]
    fn test_deserialize_optional_string_null() {
        let json = r#"{"at": "2025-06-12 20:00", "link": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.link, None);
    }

    #[test]
    fn test_deserialize_optional_string_missing() {
        let json = r#"{"at": "2025-06-12 20:00"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.link, None);
    }

    #[test]
    fn test_deserialize_optional_string_value() {
        let json = r#"{"at": "2025-06-12 20:00", "link": "https://map.example/1"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.link, Some("https://map.example/1".to_string()));
    }
}
