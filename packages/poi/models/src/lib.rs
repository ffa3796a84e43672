#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! SafeGraph point-of-interest record types.
//!
//! A [`LocationRecord`] is one row of the SafeGraph reference dataset:
//! a single physical point-of-interest with its industry classification
//! and the two vendor identifiers used to join against Advan weekly
//! patterns (`placekey`) and Veraset device visits (`safegraph_place_id`).

use serde::{Deserialize, Serialize};

/// One physical point-of-interest from the SafeGraph reference dataset.
///
/// Immutable reference data, loaded once per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Placekey identifier, shared with the Advan weekly-pattern data.
    pub placekey: String,
    /// SafeGraph place identifier, shared with the Veraset visit data.
    pub safegraph_place_id: String,
    /// NAICS industry classification code (e.g. 622110 for hospitals).
    pub naics_code: i64,
    /// ISO 3166-1 alpha-2 country code (e.g. "US").
    pub iso_country_code: String,
    /// Postal code, when present in the source data.
    pub postal_code: Option<String>,
    /// Human-readable location name, when present in the source data.
    pub location_name: Option<String>,
}

/// Extracts the placekeys from a set of location records.
#[must_use]
pub fn placekeys(records: &[LocationRecord]) -> Vec<String> {
    records.iter().map(|r| r.placekey.clone()).collect()
}

/// Extracts the SafeGraph place IDs from a set of location records.
#[must_use]
pub fn safegraph_place_ids(records: &[LocationRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.safegraph_place_id.clone())
        .collect()
}
