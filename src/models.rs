//! Data models for the fleet dashboard.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coerce;

// ---

/// Freshness label shown for every vehicle; the feed carries no timestamps.
pub const LAST_UPDATE_LABEL: &str = "Just now";

/// Fallback for missing driver and address fields.
pub const UNKNOWN: &str = "Unknown";

/// A loosely-typed scalar as found in the upstream feed.
///
/// `null`, objects and arrays are never represented; they count as absent.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    // ---
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Scalar {
    // ---
    pub fn from_value(value: &Value) -> Option<Self> {
        // ---
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => Some(Self::Number(n.clone())),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// One bus line as reported by the upstream API.
///
/// Every field is optional and untrusted; nested objects (`driver`,
/// `current_location`, `route_info`) are flattened here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawUpstreamRecord {
    // ---
    pub id: Option<Scalar>,
    pub name: Option<Scalar>,
    pub route_number: Option<Scalar>,
    pub driver_name: Option<Scalar>,
    pub status: Option<Scalar>,
    pub latitude: Option<Scalar>,
    pub longitude: Option<Scalar>,
    pub address: Option<Scalar>,
    pub average_speed: Option<Scalar>,
}

/// Categorical vehicle state used for markers, badges and stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    // ---
    Active,
    Idle,
    Offline,
}

/// Normalized, render-ready vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    // ---
    pub id: String,
    pub name: String,
    pub driver: String,
    pub status: VehicleStatus,
    pub location: String,
    pub speed: f64,
    pub last_update: String,
    /// `[latitude, longitude]`, both finite.
    pub position: [f64; 2],
}

impl VehicleStatus {
    /// Classify free-text upstream status by substring.
    ///
    /// `"active"` is checked first and wins over everything else, so
    /// `"Active (maintenance due)"` is [`VehicleStatus::Active`].
    pub fn classify(status: Option<&str>) -> Self {
        // ---
        let status = status.unwrap_or_default().to_lowercase();

        if status.contains("active") {
            Self::Active
        } else if status.contains("maintenance") || status.contains("out of service") {
            Self::Offline
        } else {
            Self::Idle
        }
    }
}

fn scalar_at(object: &Map<String, Value>, key: &str) -> Option<Scalar> {
    object.get(key).and_then(Scalar::from_value)
}

fn object_at<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    object.get(key).and_then(Value::as_object)
}

/// Extraction and transformation helpers
impl RawUpstreamRecord {
    // ---
    /// Pull the known fields out of one `bus_lines` element.
    ///
    /// Returns `None` when the element is not a JSON object.
    pub fn from_value(value: &Value) -> Option<Self> {
        // ---
        let line = value.as_object()?;
        let driver = object_at(line, "driver");
        let location = object_at(line, "current_location");
        let route_info = object_at(line, "route_info");

        Some(Self {
            id: scalar_at(line, "id"),
            name: scalar_at(line, "name"),
            route_number: scalar_at(line, "route_number"),
            driver_name: driver.and_then(|d| scalar_at(d, "name")),
            status: scalar_at(line, "status"),
            latitude: location.and_then(|l| scalar_at(l, "latitude")),
            longitude: location.and_then(|l| scalar_at(l, "longitude")),
            address: location.and_then(|l| scalar_at(l, "address")),
            average_speed: route_info.and_then(|r| scalar_at(r, "average_speed")),
        })
    }

    /// Build a [`Vehicle`] from this record at position `index` in the feed.
    ///
    /// Returns `None` unless both coordinates coerce to finite numbers.
    pub fn to_vehicle(&self, index: usize) -> Option<Vehicle> {
        // ---
        let latitude = coerce::to_finite(self.latitude.as_ref())?;
        let longitude = coerce::to_finite(self.longitude.as_ref())?;

        let id = self
            .id
            .as_ref()
            .or(self.route_number.as_ref())
            .or(self.name.as_ref())
            .map_or_else(|| index.to_string(), coerce::label);

        let name = match &self.name {
            Some(name) => coerce::label(name),
            None => format!(
                "Route {}",
                self.route_number
                    .as_ref()
                    .map(coerce::label)
                    .unwrap_or_default()
            ),
        };

        let status = self.status.as_ref().map(coerce::label);

        Some(Vehicle {
            id,
            name: name.trim().to_string(),
            driver: self
                .driver_name
                .as_ref()
                .map_or_else(|| UNKNOWN.to_string(), coerce::label),
            status: VehicleStatus::classify(status.as_deref()),
            location: self
                .address
                .as_ref()
                .map_or_else(|| UNKNOWN.to_string(), coerce::label),
            speed: coerce::to_finite(self.average_speed.as_ref())
                .unwrap_or(0.0)
                .max(0.0),
            last_update: LAST_UPDATE_LABEL.to_string(),
            position: [latitude, longitude],
        })
    }
}
