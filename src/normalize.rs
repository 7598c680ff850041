//! Vehicle normalizer: upstream payload in, render-ready vehicle list out.

use serde_json::Value;
use tracing::debug;

use crate::{RawUpstreamRecord, Vehicle};

// ---

/// Key of the record list inside the upstream payload.
pub const BUS_LINES_KEY: &str = "bus_lines";

/// Normalize an upstream payload into a list of [`Vehicle`]s.
///
/// A missing or non-array `bus_lines` yields an empty list. Records without
/// two finite coordinates (and elements that are not objects) are dropped
/// silently. Surviving records keep their relative order and are not
/// deduplicated.
pub fn normalize(payload: &Value) -> Vec<Vehicle> {
    // ---
    let Some(lines) = payload.get(BUS_LINES_KEY).and_then(Value::as_array) else {
        debug!("Payload missing '{}' field or not an array", BUS_LINES_KEY);
        return Vec::new();
    };

    let vehicles: Vec<Vehicle> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            let vehicle = RawUpstreamRecord::from_value(item).and_then(|raw| raw.to_vehicle(idx));
            if vehicle.is_none() {
                debug!("Dropping record {} without valid coordinates: {}", idx, item);
            }
            vehicle
        })
        .collect();

    debug!(
        "Normalized {} of {} upstream records",
        vehicles.len(),
        lines.len()
    );
    vehicles
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::VehicleStatus;
    use serde_json::json;

    fn located(lat: f64, lng: f64) -> Value {
        json!({"latitude": lat, "longitude": lng})
    }

    #[test]
    fn test_reference_payload() {
        // ---
        let payload = json!({
            "bus_lines": [
                {
                    "id": 1,
                    "name": "R1",
                    "status": "Active",
                    "current_location": {"latitude": "3.1", "longitude": "101.6", "address": "X"},
                    "route_info": {"average_speed": "40"}
                },
                {"id": 2, "current_location": {}}
            ]
        });

        let vehicles = normalize(&payload);
        assert_eq!(vehicles.len(), 1);

        let v = &vehicles[0];
        assert_eq!(v.id, "1");
        assert_eq!(v.name, "R1");
        assert_eq!(v.status, VehicleStatus::Active);
        assert_eq!(v.location, "X");
        assert_eq!(v.speed, 40.0);
        assert_eq!(v.position, [3.1, 101.6]);
    }

    #[test]
    fn test_missing_or_malformed_list_is_empty() {
        // ---
        assert!(normalize(&json!({})).is_empty());
        assert!(normalize(&json!({"bus_lines": null})).is_empty());
        assert!(normalize(&json!({"bus_lines": {"id": 1}})).is_empty());
        assert!(normalize(&json!({"bus_lines": "none"})).is_empty());
        assert!(normalize(&json!([1, 2, 3])).is_empty());
        assert!(normalize(&Value::Null).is_empty());
    }

    #[test]
    fn test_length_bounded_by_input() {
        // ---
        let all_valid = json!({
            "bus_lines": [
                {"id": "a", "current_location": located(1.0, 2.0)},
                {"id": "b", "current_location": located(3.0, 4.0)}
            ]
        });
        assert_eq!(normalize(&all_valid).len(), 2);

        let mixed = json!({
            "bus_lines": [
                {"id": "a", "current_location": located(1.0, 2.0)},
                null,
                42,
                {"id": "c", "current_location": {"latitude": "north", "longitude": 4}},
                {"id": "d"}
            ]
        });
        assert_eq!(normalize(&mixed).len(), 1);
    }

    #[test]
    fn test_order_preserved_without_dedup() {
        // ---
        let payload = json!({
            "bus_lines": [
                {"name": "Z", "current_location": located(1.0, 1.0)},
                {"id": 3, "current_location": {}},
                {"name": "A", "current_location": located(2.0, 2.0)},
                {"name": "Z", "current_location": located(3.0, 3.0)}
            ]
        });

        let ids: Vec<_> = normalize(&payload).into_iter().map(|v| v.id).collect();
        assert_eq!(ids, vec!["Z", "A", "Z"]);
    }

    #[test]
    fn test_positional_index_counts_dropped_records() {
        // ---
        let payload = json!({
            "bus_lines": [
                {"current_location": {}},
                {"current_location": {}},
                {"current_location": located(5.0, 6.0)}
            ]
        });

        let vehicles = normalize(&payload);
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].id, "2");
    }

    #[test]
    fn test_idempotent() {
        // ---
        let payload = json!({
            "bus_lines": [
                {"id": 1, "name": "R1", "status": "maintenance", "current_location": located(3.1, 101.6)},
                {"route_number": 8, "current_location": located(2.9, 101.5)}
            ]
        });

        assert_eq!(normalize(&payload), normalize(&payload));
    }
}
