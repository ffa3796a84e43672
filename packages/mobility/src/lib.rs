#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Veraset device-mobility processing.
//!
//! Two-pass query over the vendor's `veraset_visits` table: pass 1 finds
//! the devices that visited the target locations, pass 2 recovers those
//! devices' complete visit histories with no location filter ([`queries`]).
//! Histories are then enriched with SafeGraph location attributes
//! ([`enrich`]) to show where the devices went besides the targets.

pub mod enrich;
pub mod queries;

use footfall_database::DbError;

/// Errors that can occur during device-mobility processing.
#[derive(Debug, thiserror::Error)]
pub enum MobilityError {
    /// Database-layer error.
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    /// A vendor timestamp could not be parsed.
    #[error("Unparseable timestamp for device {caid}: {value:?}")]
    Timestamp {
        /// Device identifier of the offending row.
        caid: String,
        /// The raw timestamp text.
        value: String,
    },
}
