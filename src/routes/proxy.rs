//! Same-origin proxy for the upstream vehicle API.
//!
//! Returns the upstream JSON untouched (including `company_info`,
//! `operational_summary` and any other top-level keys) so the dashboard can
//! read it without cross-origin access. Failures become a 502 with an
//! `{"error": ...}` body.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tracing::{debug, error};

use super::AppState;
use crate::{config::PROXY_PATH, ProxyError};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route(PROXY_PATH, get(handler))
}

async fn handler(State((orchestrator, config)): State<AppState>) -> impl IntoResponse {
    // ---
    debug!("GET {} - forwarding to {}", PROXY_PATH, config.upstream_url);

    match forward(orchestrator.client(), &config.upstream_url).await {
        Ok(payload) => (
            [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
            Json(payload),
        )
            .into_response(),
        Err(e) => {
            error!("Upstream proxy failure: {}", e);
            e.into_response()
        }
    }
}

async fn forward(client: &reqwest::Client, url: &str) -> Result<Value, ProxyError> {
    // ---
    let response = client
        .get(url)
        .header(header::CACHE_CONTROL, "no-store")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProxyError::Upstream(status));
    }

    Ok(response.json().await?)
}
