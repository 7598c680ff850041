//! Error types for feed retrieval and the upstream proxy.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;
use thiserror::Error;

// ---

/// Message shown when a failure carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "Failed to load data";

/// Failure of one fetch cycle in the orchestrator.
#[derive(Debug, Error)]
pub enum FetchError {
    // ---
    #[error("Failed to fetch vehicles: {}", .0.as_u16())]
    Status(StatusCode),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    /// The user-visible error string for this failure.
    pub fn user_message(&self) -> String {
        // ---
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Failure of the upstream proxy; always rendered as a 502 JSON body.
#[derive(Debug, Error)]
pub enum ProxyError {
    // ---
    #[error("Upstream returned {}", .0.as_u16())]
    Upstream(StatusCode),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        // ---
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_status_message_embeds_code() {
        // ---
        let err = FetchError::Status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.user_message(), "Failed to fetch vehicles: 503");
    }

    #[test]
    fn test_proxy_error_is_bad_gateway() {
        // ---
        let err = ProxyError::Upstream(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Upstream returned 404");
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
