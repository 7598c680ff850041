//! Read-only projections of the published vehicle list.
//!
//! These back the dashboard widgets: map markers, stat cards, and the
//! searchable list. None of them mutate the list they are given.

use serde::{Deserialize, Serialize};

use crate::{Vehicle, VehicleStatus};

// ---

/// Map marker for a single vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    // ---
    pub id: String,
    pub position: [f64; 2],
    pub title: String,
    pub status: VehicleStatus,
}

/// Stat-card counts for the current fleet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetStats {
    // ---
    pub total: usize,
    pub active: usize,
    pub idle: usize,
    pub offline: usize,
}

impl FleetStats {
    // ---
    pub fn from_vehicles(vehicles: &[Vehicle]) -> Self {
        // ---
        vehicles.iter().fold(
            Self {
                total: vehicles.len(),
                ..Self::default()
            },
            |mut stats, v| {
                match v.status {
                    VehicleStatus::Active => stats.active += 1,
                    VehicleStatus::Idle => stats.idle += 1,
                    VehicleStatus::Offline => stats.offline += 1,
                }
                stats
            },
        )
    }
}

pub fn markers(vehicles: &[Vehicle]) -> Vec<Marker> {
    // ---
    vehicles
        .iter()
        .map(|v| Marker {
            id: v.id.clone(),
            position: v.position,
            title: v.name.clone(),
            status: v.status,
        })
        .collect()
}

/// Case-insensitive substring search over name, driver and location.
///
/// The query is trimmed; an empty query returns every vehicle.
pub fn search(vehicles: &[Vehicle], query: &str) -> Vec<Vehicle> {
    // ---
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return vehicles.to_vec();
    }

    vehicles
        .iter()
        .filter(|v| {
            [&v.name, &v.driver, &v.location]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}
