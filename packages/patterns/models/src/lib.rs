#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Advan weekly-pattern record types and their derived hourly forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One location-week of Advan visit data, as stored by the vendor.
///
/// `visits_by_each_hour` stays in its raw JSON-encoded form until the
/// reshape stage decodes it; a week without data carries `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPatternRow {
    /// Placekey of the visited location.
    pub placekey: String,
    /// Inclusive start of the reported week.
    pub date_range_start: DateTime<Utc>,
    /// Exclusive end of the reported week.
    pub date_range_end: DateTime<Utc>,
    /// JSON-encoded array of per-hour visit counts (24 x 7 = 168 entries
    /// for a full week), or `None` when the vendor reported no data.
    pub visits_by_each_hour: Option<String>,
}

/// One location-hour of visit data, derived by exploding a
/// [`WeeklyPatternRow`].
///
/// Identity is (`placekey`, `timestamp`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyVisit {
    /// Placekey of the visited location.
    pub placekey: String,
    /// Start of the hour this count covers.
    pub timestamp: DateTime<Utc>,
    /// Visit count for the hour.
    pub visits: i64,
    /// Share of the week's visits that fell in this hour. 0.0 for weeks
    /// whose total count is zero.
    pub visit_proportion: f64,
}

/// An [`HourlyVisit`] with location attributes attached by the inner
/// join against the SafeGraph reference set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatedHourlyVisit {
    /// Placekey of the visited location.
    pub placekey: String,
    /// Postal code from the matching reference record.
    pub postal_code: Option<String>,
    /// Human-readable name from the matching reference record.
    pub location_name: Option<String>,
    /// Start of the hour this count covers.
    pub timestamp: DateTime<Utc>,
    /// Visit count for the hour.
    pub visits: i64,
    /// Share of the week's visits that fell in this hour.
    pub visit_proportion: f64,
}
