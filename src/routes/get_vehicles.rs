use axum::{extract::Query, extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Deserialize;
use tracing::{debug, info};

use super::AppState;
use crate::views::{self, FleetStats};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/feed", get(feed))
        .route("/vehicles", get(vehicles))
        .route("/markers", get(markers))
        .route("/stats", get(stats))
}

/// Query parameters for the vehicle list
#[derive(Debug, Deserialize)]
pub struct VehiclesQuery {
    /// Free-text search over name, driver and location
    q: Option<String>,
}

/// Full orchestrator snapshot.
async fn feed(State((orchestrator, _)): State<AppState>) -> impl IntoResponse {
    // ---
    Json(orchestrator.snapshot().await)
}

/// Snapshot with the vehicle list narrowed by the search query.
async fn vehicles(
    Query(params): Query<VehiclesQuery>,
    State((orchestrator, _)): State<AppState>,
) -> impl IntoResponse {
    // ---
    let mut snapshot = orchestrator.snapshot().await;

    if let Some(query) = params.q.as_deref() {
        let total = snapshot.vehicles.len();
        snapshot.vehicles = views::search(&snapshot.vehicles, query);
        info!(
            "GET /vehicles - search {:?} matched {} of {}",
            query,
            snapshot.vehicles.len(),
            total
        );
    }

    Json(snapshot)
}

async fn markers(State((orchestrator, _)): State<AppState>) -> impl IntoResponse {
    // ---
    let snapshot = orchestrator.snapshot().await;
    debug!("GET /markers - {} vehicles", snapshot.vehicles.len());
    Json(views::markers(&snapshot.vehicles))
}

async fn stats(State((orchestrator, _)): State<AppState>) -> impl IntoResponse {
    // ---
    Json(FleetStats::from_vehicles(
        &orchestrator.snapshot().await.vehicles,
    ))
}
