//! Two-pass queries against the Veraset visits `DuckDB`.

use std::collections::BTreeSet;

use duckdb::Connection;
use footfall_database::query::query_in_chunks;
use footfall_database::timestamp::parse_duckdb_timestamp;
use footfall_mobility_models::DeviceVisit;

use crate::MobilityError;

/// Pass 1: finds every device that visited any of the target locations.
///
/// Returns a sorted, deduplicated CAID list. `SELECT DISTINCT` runs per
/// chunk, so the dedup across chunks happens client-side; chunking never
/// changes the result. An empty target list returns an empty result
/// without querying.
///
/// # Errors
///
/// Returns [`MobilityError`] if the query fails.
pub fn fetch_visiting_devices(
    conn: &Connection,
    safegraph_place_ids: &[String],
) -> Result<Vec<String>, MobilityError> {
    let caids: Vec<String> = query_in_chunks(
        conn,
        "SELECT DISTINCT caid FROM veraset_visits WHERE safegraph_place_id IN",
        safegraph_place_ids,
        |row| row.get(0),
    )
    .map_err(MobilityError::Db)?;

    let unique: BTreeSet<String> = caids.into_iter().collect();
    let devices: Vec<String> = unique.into_iter().collect();

    log::info!(
        "Found {} devices across {} target locations",
        devices.len(),
        safegraph_place_ids.len()
    );
    Ok(devices)
}

/// Pass 2: fetches the complete visit history of the given devices.
///
/// Deliberately unconstrained by the original location set, so the full
/// mobility trace of each device is recovered. An empty device list
/// returns an empty result without querying.
///
/// # Errors
///
/// Returns [`MobilityError`] if the query fails or a vendor timestamp
/// cannot be parsed.
pub fn fetch_device_history(
    conn: &Connection,
    caids: &[String],
) -> Result<Vec<DeviceVisit>, MobilityError> {
    let raw: Vec<(String, String, String)> = query_in_chunks(
        conn,
        "SELECT local_timestamp::TEXT, caid, safegraph_place_id
         FROM veraset_visits
         WHERE caid IN",
        caids,
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )
    .map_err(MobilityError::Db)?;

    let mut visits = Vec::with_capacity(raw.len());
    for (timestamp, caid, safegraph_place_id) in raw {
        let local_timestamp =
            parse_duckdb_timestamp(&timestamp).ok_or_else(|| MobilityError::Timestamp {
                caid: caid.clone(),
                value: timestamp.clone(),
            })?;

        visits.push(DeviceVisit {
            caid,
            safegraph_place_id,
            local_timestamp,
        });
    }

    log::info!("Fetched {} visit events for {} devices", visits.len(), caids.len());
    Ok(visits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE veraset_visits (
                caid TEXT NOT NULL,
                safegraph_place_id TEXT NOT NULL,
                local_timestamp TIMESTAMP NOT NULL
            );
            INSERT INTO veraset_visits VALUES
                ('dev-1', 'sg-hospital', '2024-01-02 08:00:00'),
                ('dev-1', 'sg-cafe',     '2024-01-02 09:30:00'),
                ('dev-2', 'sg-hospital', '2024-01-03 14:00:00'),
                ('dev-2', 'sg-hospital', '2024-01-04 14:00:00'),
                ('dev-3', 'sg-gym',      '2024-01-02 18:00:00');",
        )
        .unwrap();
        conn
    }

    #[test]
    fn pass_one_returns_sorted_unique_devices() {
        let conn = seeded_conn();
        let targets = vec!["sg-hospital".to_string()];
        let devices = fetch_visiting_devices(&conn, &targets).unwrap();

        assert_eq!(devices, vec!["dev-1".to_string(), "dev-2".to_string()]);
    }

    #[test]
    fn pass_two_devices_are_contained_in_pass_one() {
        let conn = seeded_conn();
        let targets = vec!["sg-hospital".to_string()];

        let devices = fetch_visiting_devices(&conn, &targets).unwrap();
        let history = fetch_device_history(&conn, &devices).unwrap();

        assert!(history.iter().all(|v| devices.contains(&v.caid)));
        // Pass 2 is unconstrained by location: dev-1's cafe visit is kept.
        assert!(history
            .iter()
            .any(|v| v.safegraph_place_id == "sg-cafe"));
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn pass_one_dedupes_devices_across_chunks() {
        let conn = Connection::open_in_memory().unwrap();
        // Seven devices spread over 1001 locations, so every device is
        // matched by the first chunk and dev-6 (1000 % 7) also by the
        // second.
        conn.execute_batch(
            "CREATE TABLE veraset_visits (
                caid TEXT NOT NULL,
                safegraph_place_id TEXT NOT NULL,
                local_timestamp TIMESTAMP NOT NULL
            );
            INSERT INTO veraset_visits
            SELECT 'dev-' || (i % 7), 'sg-' || i, TIMESTAMP '2024-01-02 08:00:00'
            FROM range(1001) t(i);",
        )
        .unwrap();

        let targets: Vec<String> = (0..1001).map(|i| format!("sg-{i}")).collect();
        assert!(targets.len() > footfall_database::query::IN_CHUNK_SIZE);

        let devices = fetch_visiting_devices(&conn, &targets).unwrap();

        let expected: Vec<String> = (0..7).map(|i| format!("dev-{i}")).collect();
        assert_eq!(devices, expected);
    }

    #[test]
    fn empty_target_set_short_circuits_both_passes() {
        let conn = seeded_conn();

        let devices = fetch_visiting_devices(&conn, &[]).unwrap();
        assert!(devices.is_empty());

        let history = fetch_device_history(&conn, &devices).unwrap();
        assert!(history.is_empty());
    }
}
