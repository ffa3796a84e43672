#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Veraset device-visit record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One device visit event from the Veraset store.
///
/// Keyed by an anonymous device identifier (CAID).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceVisit {
    /// Anonymous device/consumer identifier.
    pub caid: String,
    /// SafeGraph place ID of the visited location.
    pub safegraph_place_id: String,
    /// When the visit occurred.
    pub local_timestamp: DateTime<Utc>,
}

/// A [`DeviceVisit`] with location attributes attached by the inner join
/// against the country-filtered SafeGraph reference set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatedDeviceVisit {
    /// Anonymous device/consumer identifier.
    pub caid: String,
    /// When the visit occurred.
    pub local_timestamp: DateTime<Utc>,
    /// SafeGraph place ID of the visited location.
    pub safegraph_place_id: String,
    /// Placekey from the matching reference record.
    pub placekey: String,
    /// NAICS code from the matching reference record.
    pub naics_code: i64,
    /// Postal code from the matching reference record.
    pub postal_code: Option<String>,
    /// Human-readable name from the matching reference record.
    pub location_name: Option<String>,
}
