//! Exploding weekly patterns into per-hour visit rows.
//!
//! Each location-week carries a JSON-encoded array of hourly counts.
//! Reshaping decodes the array, normalizes counts into proportions of
//! the week's total, pairs each count with a generated hourly timestamp,
//! and emits one [`HourlyVisit`] per hour.

use chrono::{DateTime, Duration, Utc};
use footfall_patterns_models::{HourlyVisit, WeeklyPatternRow};

use crate::PatternError;

/// Generates the hourly timestamp sequence for a half-open range.
///
/// `[start, end)` at 1-hour resolution: `end` itself is never included.
#[must_use]
pub fn hourly_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let mut timestamps = Vec::new();
    let mut t = start;
    while t < end {
        timestamps.push(t);
        t += Duration::hours(1);
    }
    timestamps
}

/// Explodes weekly-pattern rows into one [`HourlyVisit`] per hour.
///
/// Rows whose `visits_by_each_hour` is `None` are dropped. A week whose
/// counts sum to zero yields proportions of 0.0 for every hour, never
/// NaN.
///
/// # Errors
///
/// Returns [`PatternError::Decode`] if a JSON payload is malformed, or
/// [`PatternError::Shape`] if the decoded count array's length differs
/// from the hour count of the row's date range.
pub fn explode_hourly(rows: &[WeeklyPatternRow]) -> Result<Vec<HourlyVisit>, PatternError> {
    let mut hourly = Vec::new();
    let mut dropped = 0usize;

    for row in rows {
        let Some(encoded) = row.visits_by_each_hour.as_deref() else {
            dropped += 1;
            continue;
        };

        let counts: Vec<i64> =
            serde_json::from_str(encoded).map_err(|source| PatternError::Decode {
                placekey: row.placekey.clone(),
                source,
            })?;

        let timestamps = hourly_range(row.date_range_start, row.date_range_end);
        if counts.len() != timestamps.len() {
            return Err(PatternError::Shape {
                placekey: row.placekey.clone(),
                counts: counts.len(),
                hours: timestamps.len(),
            });
        }

        let week_total: i64 = counts.iter().sum();

        for (visits, timestamp) in counts.into_iter().zip(timestamps) {
            #[allow(clippy::cast_precision_loss)]
            let visit_proportion = if week_total == 0 {
                0.0
            } else {
                visits as f64 / week_total as f64
            };

            hourly.push(HourlyVisit {
                placekey: row.placekey.clone(),
                timestamp,
                visits,
                visit_proportion,
            });
        }
    }

    if dropped > 0 {
        log::debug!("Dropped {dropped} weekly-pattern rows with no hourly data");
    }

    Ok(hourly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn week_row(placekey: &str, hours: i64, payload: Option<&str>) -> WeeklyPatternRow {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        WeeklyPatternRow {
            placekey: placekey.to_string(),
            date_range_start: start,
            date_range_end: start + Duration::hours(hours),
            visits_by_each_hour: payload.map(str::to_string),
        }
    }

    #[test]
    fn hourly_range_is_half_open() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = start + Duration::hours(168);
        let range = hourly_range(start, end);

        assert_eq!(range.len(), 168);
        assert_eq!(range[0], start);
        assert_eq!(*range.last().unwrap(), end - Duration::hours(1));
    }

    #[test]
    fn two_counts_over_two_hours_split_evenly() {
        let rows = vec![week_row("pk-1", 2, Some("[2, 2]"))];
        let hourly = explode_hourly(&rows).unwrap();

        assert_eq!(hourly.len(), 2);
        assert!((hourly[0].visit_proportion - 0.5).abs() < 1e-9);
        assert!((hourly[1].visit_proportion - 0.5).abs() < 1e-9);
        assert_eq!(hourly[1].timestamp - hourly[0].timestamp, Duration::hours(1));
    }

    #[test]
    fn proportions_sum_to_one_per_source_row() {
        let rows = vec![week_row(
            "pk-1",
            5,
            Some("[3, 0, 7, 1, 9]"),
        )];
        let hourly = explode_hourly(&rows).unwrap();

        let sum: f64 = hourly.iter().map(|h| h.visit_proportion).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_sum_week_yields_zero_proportions() {
        let rows = vec![week_row("pk-1", 3, Some("[0, 0, 0]"))];
        let hourly = explode_hourly(&rows).unwrap();

        assert_eq!(hourly.len(), 3);
        assert!(hourly.iter().all(|h| h.visit_proportion == 0.0));
    }

    #[test]
    fn null_payload_rows_are_dropped() {
        let rows = vec![
            week_row("pk-1", 2, None),
            week_row("pk-2", 2, Some("[1, 1]")),
        ];
        let hourly = explode_hourly(&rows).unwrap();

        assert_eq!(hourly.len(), 2);
        assert!(hourly.iter().all(|h| h.placekey == "pk-2"));
    }

    #[test]
    fn length_mismatch_is_shape_error() {
        let rows = vec![week_row("pk-1", 3, Some("[1, 1]"))];
        let result = explode_hourly(&rows);

        assert!(matches!(
            result,
            Err(PatternError::Shape {
                counts: 2,
                hours: 3,
                ..
            })
        ));
    }

    #[test]
    fn malformed_payload_is_decode_error() {
        let rows = vec![week_row("pk-1", 2, Some("[1, oops]"))];
        let result = explode_hourly(&rows);

        assert!(matches!(result, Err(PatternError::Decode { .. })));
    }
}
