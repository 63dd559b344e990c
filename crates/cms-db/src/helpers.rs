//! Row-to-entity parsing helpers.
//!
//! Repos convert column-indexed `libsql::Row` values into typed entities.
//! Timestamps may be written by Rust (`to_rfc3339()`) or by a column default
//! (`datetime('now')`), so both formats are accepted.

use chrono::{DateTime, Utc};
use cms_report::duration::clamp_minutes;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read an INTEGER minutes column as `u32`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_minutes(row: &libsql::Row, idx: i32) -> Result<u32, DatabaseError> {
    Ok(clamp_minutes(row.get::<i64>(idx)?))
}

/// Bind an optional string, mapping `None` to SQL NULL.
pub(crate) fn opt_value(value: Option<&str>) -> libsql::Value {
    value.map_or(libsql::Value::Null, Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_core::enums::{Category, CourseStatus};

    #[test]
    fn parses_both_datetime_formats() {
        let rfc = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        let sqlite = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(rfc, sqlite);
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(matches!(parse_datetime("yesterday"), Err(DatabaseError::Query(_))));
    }

    #[test]
    fn parses_stored_enum_values() {
        assert_eq!(parse_enum::<Category>("UI/UX Design").unwrap(), Category::UiUxDesign);
        assert_eq!(parse_enum::<CourseStatus>("published").unwrap(), CourseStatus::Published);
        assert!(parse_enum::<Category>("uiux-design").is_err());
    }
}
