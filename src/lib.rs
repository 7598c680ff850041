//! Backend for the transit fleet tracking dashboard.
//!
//! Fetches the bus-line feed (directly or through the same-origin proxy),
//! normalizes it into [`Vehicle`] records and serves the list, map markers
//! and stat cards as JSON.
//!
//! Module boundaries follow the Explicit Module Boundary Pattern (EMBP):
//! sibling modules import shared types from the crate root rather than from
//! each other.

pub mod coerce;
pub mod config;
mod error;
mod models;
pub mod normalize;
mod orchestrator;
pub mod routes;
pub mod views;

pub use config::Config;
pub use error::{FetchError, ProxyError, FALLBACK_MESSAGE};
pub use models::{
    RawUpstreamRecord, Scalar, Vehicle, VehicleStatus, LAST_UPDATE_LABEL, UNKNOWN,
};
pub use orchestrator::{fetch_vehicles, FeedOrchestrator, FeedSnapshot};
