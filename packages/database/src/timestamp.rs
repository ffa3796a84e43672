//! Timestamp decoding for vendor `DuckDB` text casts.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Decodes a timestamp produced by a `DuckDB` `::TEXT` cast into a UTC
/// `DateTime`.
///
/// The cast output varies with the column type and stored precision:
/// plain `TIMESTAMP` columns yield naive text, with or without
/// fractional seconds, while `TIMESTAMPTZ` columns append an offset
/// suffix such as `+00`. Vendors differ on which column type they ship,
/// so all four shapes are accepted. Naive text is taken as UTC.
#[must_use]
pub fn parse_duckdb_timestamp(s: &str) -> Option<DateTime<Utc>> {
    const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%z", "%Y-%m-%d %H:%M:%S%.f%z"];
    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }

    log::warn!("Failed to parse timestamp: {s:?}");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_plain_timestamp() {
        let dt = parse_duckdb_timestamp("2024-01-15 10:30:00").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn parses_fractional_seconds() {
        assert!(parse_duckdb_timestamp("2024-01-15 10:30:00.123").is_some());
    }

    #[test]
    fn parses_timezone_offset() {
        assert!(parse_duckdb_timestamp("2024-01-15 10:30:00+00").is_some());
        assert!(parse_duckdb_timestamp("2024-01-15 10:30:00.123+00").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_duckdb_timestamp("not a timestamp").is_none());
        assert!(parse_duckdb_timestamp("2024-01-15").is_none());
    }
}
