// src/routes/health.rs
//! Liveness endpoint for the fleet dashboard service.
//!
//! Follows the Explicit Module Boundary Pattern (EMBP): the handler stays
//! private to this file and the gateway (`mod.rs`) merges the subrouter.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Handle `GET /health`.
///
/// Does not touch the upstream feed or the orchestrator state.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Subrouter with the `/health` route, generic over the gateway state.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
