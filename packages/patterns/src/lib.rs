#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Advan weekly-pattern processing.
//!
//! Queries the vendor's `advan_weekly_patterns` table for a set of target
//! placekeys ([`queries`]), explodes each location-week into one row per
//! hour with normalized visit proportions ([`reshape`]), and attaches
//! SafeGraph location attributes via an inner join ([`enrich`]).

pub mod enrich;
pub mod queries;
pub mod reshape;

use footfall_database::DbError;

/// Errors that can occur during weekly-pattern processing.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// Database-layer error.
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    /// The JSON-encoded hourly-count array could not be decoded.
    #[error("Failed to decode hourly visits for {placekey}: {source}")]
    Decode {
        /// Placekey of the offending row.
        placekey: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The decoded hourly-count array does not match the date range.
    #[error("Hourly visits for {placekey} have {counts} entries but the date range spans {hours} hours")]
    Shape {
        /// Placekey of the offending row.
        placekey: String,
        /// Decoded array length.
        counts: usize,
        /// Hour count of the half-open date range.
        hours: usize,
    },

    /// A vendor timestamp could not be parsed.
    #[error("Unparseable timestamp for {placekey}: {value:?}")]
    Timestamp {
        /// Placekey of the offending row.
        placekey: String,
        /// The raw timestamp text.
        value: String,
    },
}
