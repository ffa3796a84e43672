//! Queries against the Advan weekly-patterns `DuckDB`.

use duckdb::Connection;
use footfall_database::query::query_in_chunks;
use footfall_database::timestamp::parse_duckdb_timestamp;
use footfall_patterns_models::WeeklyPatternRow;

use crate::PatternError;

/// Fetches the weekly-pattern rows for a set of target placekeys.
///
/// Results are sorted by placekey so downstream output is deterministic.
/// An empty placekey list returns an empty result without querying.
///
/// # Errors
///
/// Returns [`PatternError`] if the query fails or a vendor timestamp
/// cannot be parsed.
pub fn fetch_weekly_patterns(
    conn: &Connection,
    placekeys: &[String],
) -> Result<Vec<WeeklyPatternRow>, PatternError> {
    let raw: Vec<(String, String, String, Option<String>)> = query_in_chunks(
        conn,
        "SELECT placekey, date_range_start::TEXT, date_range_end::TEXT, visits_by_each_hour
         FROM advan_weekly_patterns
         WHERE placekey IN",
        placekeys,
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
    )?;

    let mut rows = Vec::with_capacity(raw.len());
    for (placekey, start, end, visits_by_each_hour) in raw {
        let date_range_start =
            parse_duckdb_timestamp(&start).ok_or_else(|| PatternError::Timestamp {
                placekey: placekey.clone(),
                value: start.clone(),
            })?;
        let date_range_end =
            parse_duckdb_timestamp(&end).ok_or_else(|| PatternError::Timestamp {
                placekey: placekey.clone(),
                value: end.clone(),
            })?;

        rows.push(WeeklyPatternRow {
            placekey,
            date_range_start,
            date_range_end,
            visits_by_each_hour,
        });
    }

    rows.sort_by(|a, b| {
        a.placekey
            .cmp(&b.placekey)
            .then(a.date_range_start.cmp(&b.date_range_start))
    });

    log::info!("Fetched {} weekly-pattern rows", rows.len());
    Ok(rows)
}
