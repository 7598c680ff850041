//! Retargeting endpoint: switches the dashboard to a different feed URL.
//!
//! A changed URL supersedes the in-flight cycle; an unchanged URL is a no-op.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::put, Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::AppState;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/feed/target", put(handler))
}

#[derive(Debug, Deserialize)]
pub struct TargetRequest {
    url: String,
}

async fn handler(
    State((orchestrator, _)): State<AppState>,
    Json(body): Json<TargetRequest>,
) -> impl IntoResponse {
    // ---
    let url = body.url.trim();
    if url.is_empty() {
        warn!("PUT /feed/target - rejected empty url");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "url must not be empty" })),
        )
            .into_response();
    }

    let restarted = orchestrator.retarget(url).await;
    info!("PUT /feed/target - {} (restarted: {})", url, restarted);

    (StatusCode::ACCEPTED, Json(orchestrator.snapshot().await)).into_response()
}
