//! Joining device visit histories with SafeGraph location attributes.

use std::collections::BTreeMap;

use footfall_mobility_models::{DeviceVisit, LocatedDeviceVisit};
use footfall_poi_models::LocationRecord;

/// Inner-joins device visits against the country-filtered reference set
/// on `safegraph_place_id`.
///
/// The reference set is deliberately industry-unfiltered here: the point
/// of the mobility trace is to see where devices went besides the target
/// industry. Visits to locations outside the reference set (e.g. other
/// countries) are dropped.
#[must_use]
pub fn join_locations(
    visits: Vec<DeviceVisit>,
    locations: &[LocationRecord],
) -> Vec<LocatedDeviceVisit> {
    let by_place_id: BTreeMap<&str, &LocationRecord> = locations
        .iter()
        .map(|loc| (loc.safegraph_place_id.as_str(), loc))
        .collect();

    visits
        .into_iter()
        .filter_map(|visit| {
            by_place_id
                .get(visit.safegraph_place_id.as_str())
                .map(|loc| LocatedDeviceVisit {
                    caid: visit.caid,
                    local_timestamp: visit.local_timestamp,
                    safegraph_place_id: visit.safegraph_place_id,
                    placekey: loc.placekey.clone(),
                    naics_code: loc.naics_code,
                    postal_code: loc.postal_code.clone(),
                    location_name: loc.location_name.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn location(place_id: &str, naics_code: i64) -> LocationRecord {
        LocationRecord {
            placekey: format!("pk-{place_id}"),
            safegraph_place_id: place_id.to_string(),
            naics_code,
            iso_country_code: "US".to_string(),
            postal_code: Some("30301".to_string()),
            location_name: Some("Somewhere".to_string()),
        }
    }

    fn visit(caid: &str, place_id: &str) -> DeviceVisit {
        DeviceVisit {
            caid: caid.to_string(),
            safegraph_place_id: place_id.to_string(),
            local_timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn join_is_inner_and_projects_attributes() {
        let locations = vec![location("sg-hospital", 622110), location("sg-cafe", 722515)];
        let visits = vec![
            visit("dev-1", "sg-hospital"),
            visit("dev-1", "sg-cafe"),
            visit("dev-1", "sg-abroad"),
        ];

        let located = join_locations(visits, &locations);

        assert_eq!(located.len(), 2);
        assert!(located
            .iter()
            .all(|v| locations.iter().any(|l| l.safegraph_place_id == v.safegraph_place_id)));
        assert_eq!(located[0].placekey, "pk-sg-hospital");
        assert_eq!(located[1].naics_code, 722515);
    }
}
