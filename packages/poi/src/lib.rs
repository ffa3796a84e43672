#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! SafeGraph reference-data filtering.
//!
//! Loads [`LocationRecord`]s from the SafeGraph parquet file through a
//! transient in-memory `DuckDB` connection. Filter predicates are bound
//! as query parameters and evaluated inside the `read_parquet` scan, so
//! the full dataset is never materialized.

use std::path::Path;

use duckdb::Connection;
use footfall_database::DbError;
use footfall_poi_models::LocationRecord;

/// Errors that can occur while loading reference data.
#[derive(Debug, thiserror::Error)]
pub enum PoiError {
    /// Database-layer error (including missing-file configuration errors).
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    /// `DuckDB` rejected or failed the parquet scan.
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),
}

/// Loads the locations matching a NAICS code and country code.
///
/// # Errors
///
/// Returns [`PoiError`] if the parquet file does not exist or the scan
/// fails.
pub fn load_filtered(
    parquet: &Path,
    naics_code: i64,
    country: &str,
) -> Result<Vec<LocationRecord>, PoiError> {
    let records = load_where(
        parquet,
        "naics_code = ? AND iso_country_code = ?",
        &[&naics_code, &country],
    )?;
    log::info!(
        "Loaded {} locations for NAICS {naics_code} in {country}",
        records.len()
    );
    Ok(records)
}

/// Loads every location in a country, regardless of industry.
///
/// Used to attach human-readable context to device mobility traces that
/// range outside the target industry.
///
/// # Errors
///
/// Returns [`PoiError`] if the parquet file does not exist or the scan
/// fails.
pub fn load_by_country(parquet: &Path, country: &str) -> Result<Vec<LocationRecord>, PoiError> {
    let records = load_where(parquet, "iso_country_code = ?", &[&country])?;
    log::info!("Loaded {} locations in {country}", records.len());
    Ok(records)
}

fn load_where(
    parquet: &Path,
    where_sql: &str,
    params: &[&dyn duckdb::ToSql],
) -> Result<Vec<LocationRecord>, PoiError> {
    if !parquet.is_file() {
        return Err(DbError::Config {
            message: format!("parquet file does not exist: {}", parquet.display()),
        }
        .into());
    }

    // File paths are trusted configuration, bound into the table function
    // as a quoted literal; filter values are always bound parameters.
    let path_sql = parquet.display().to_string().replace('\'', "''");
    let sql = format!(
        "SELECT placekey, safegraph_place_id, naics_code::BIGINT,
                iso_country_code, postal_code, location_name
         FROM read_parquet('{path_sql}')
         WHERE {where_sql}"
    );

    let conn = Connection::open_in_memory()?;
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(params)?;

    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        records.push(LocationRecord {
            placekey: row.get(0)?,
            safegraph_place_id: row.get(1)?,
            naics_code: row.get(2)?,
            iso_country_code: row.get(3)?,
            postal_code: row.get(4)?,
            location_name: row.get(5)?,
        });
    }

    Ok(records)
}
