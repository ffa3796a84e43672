//! Joining hourly visits with SafeGraph location attributes.

use std::collections::BTreeMap;

use footfall_patterns_models::{HourlyVisit, LocatedHourlyVisit};
use footfall_poi_models::LocationRecord;

/// Inner-joins hourly visits against the filtered reference set on
/// placekey, projecting postal code and location name onto each row.
///
/// Visits with no matching location are dropped; visits outside the
/// target industry/country filter are not analytically relevant.
#[must_use]
pub fn join_locations(
    hourly: Vec<HourlyVisit>,
    locations: &[LocationRecord],
) -> Vec<LocatedHourlyVisit> {
    let by_placekey: BTreeMap<&str, &LocationRecord> = locations
        .iter()
        .map(|loc| (loc.placekey.as_str(), loc))
        .collect();

    hourly
        .into_iter()
        .filter_map(|visit| {
            by_placekey.get(visit.placekey.as_str()).map(|loc| LocatedHourlyVisit {
                placekey: visit.placekey,
                postal_code: loc.postal_code.clone(),
                location_name: loc.location_name.clone(),
                timestamp: visit.timestamp,
                visits: visit.visits,
                visit_proportion: visit.visit_proportion,
            })
        })
        .collect()
}
