//! Data fetch orchestrator.
//!
//! Owns the published dashboard state and runs at most one retrieval cycle at
//! a time. A cycle is started by [`FeedOrchestrator::activate`] (the dashboard
//! mounting) or by [`FeedOrchestrator::retarget`] (the feed URL changing), and
//! goes `loading → {success, failure}`.
//!
//! Starting a new cycle cancels the previous one through its
//! [`CancellationToken`]. Cancellation is cooperative, so each cycle also
//! carries a generation number; the cycle only writes state while holding the
//! state lock and only if its generation is still the current one.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::{normalize, FetchError, Vehicle};

// ---

/// Published dashboard state, as served to the widgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    // ---
    /// Feed URL of the current cycle; `None` while inactive.
    pub target: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    /// When `vehicles` was last replaced by a successful fetch.
    pub fetched_at: Option<DateTime<Utc>>,
    pub vehicles: Vec<Vehicle>,
}

#[derive(Debug, Default)]
struct FeedState {
    // ---
    generation: u64,
    cancel: Option<CancellationToken>,
    snapshot: FeedSnapshot,
}

#[derive(Debug)]
struct Inner {
    client: reqwest::Client,
    state: Mutex<FeedState>,
}

/// Cloneable handle to one dashboard's fetch state.
#[derive(Debug, Clone)]
pub struct FeedOrchestrator {
    inner: Arc<Inner>,
}

/// Fetch `url` and normalize the body into vehicles.
///
/// Non-2xx responses become [`FetchError::Status`]; transport and JSON
/// decoding failures become [`FetchError::Transport`]. No retries.
pub async fn fetch_vehicles(client: &reqwest::Client, url: &str) -> Result<Vec<Vehicle>, FetchError> {
    // ---
    debug!("Fetching vehicle feed from: {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let payload: Value = response.json().await?;
    Ok(normalize::normalize(&payload))
}

impl FeedOrchestrator {
    // ---
    pub fn new(client: reqwest::Client) -> Self {
        // ---
        Self {
            inner: Arc::new(Inner {
                client,
                state: Mutex::new(FeedState::default()),
            }),
        }
    }

    /// Shared outbound HTTP client.
    pub fn client(&self) -> &reqwest::Client {
        &self.inner.client
    }

    /// Current published state.
    pub async fn snapshot(&self) -> FeedSnapshot {
        self.inner.state.lock().await.snapshot.clone()
    }

    /// Start a new cycle against `target`, superseding any in-flight one.
    ///
    /// Sets `loading`, clears the previous error and returns immediately; the
    /// request runs on a spawned task.
    pub async fn activate(&self, target: impl Into<String>) {
        // ---
        let target = target.into();
        let token = CancellationToken::new();

        let generation = {
            let mut state = self.inner.state.lock().await;
            if let Some(previous) = state.cancel.replace(token.clone()) {
                previous.cancel();
            }
            state.generation += 1;
            state.snapshot.target = Some(target.clone());
            state.snapshot.loading = true;
            state.snapshot.error = None;
            state.generation
        };

        info!("Starting feed cycle {} for {}", generation, target);

        let this = self.clone();
        tokio::spawn(async move { this.run_cycle(generation, target, token).await });
    }

    /// Point the dashboard at a different feed URL.
    ///
    /// Returns `false` without starting a cycle when `target` is already the
    /// current one.
    pub async fn retarget(&self, target: impl Into<String>) -> bool {
        // ---
        let target = target.into();
        if self.snapshot().await.target.as_deref() == Some(target.as_str()) {
            debug!("Feed target unchanged: {}", target);
            return false;
        }

        self.activate(target).await;
        true
    }

    /// Tear down: cancel the in-flight cycle and discard published state.
    pub async fn deactivate(&self) {
        // ---
        let mut state = self.inner.state.lock().await;
        if let Some(token) = state.cancel.take() {
            token.cancel();
        }
        state.generation += 1;
        state.snapshot = FeedSnapshot::default();

        info!("Feed orchestrator deactivated");
    }

    async fn run_cycle(&self, generation: u64, target: String, token: CancellationToken) {
        // ---
        let outcome = tokio::select! {
            _ = token.cancelled() => {
                debug!("Feed cycle {} cancelled before completion", generation);
                return;
            }
            outcome = fetch_vehicles(&self.inner.client, &target) => outcome,
        };

        let mut state = self.inner.state.lock().await;
        if state.generation != generation || token.is_cancelled() {
            debug!(
                "Discarding result of stale feed cycle {} (current: {})",
                generation, state.generation
            );
            return;
        }

        match outcome {
            Ok(vehicles) => {
                info!("Feed cycle {} published {} vehicles", generation, vehicles.len());
                state.snapshot.vehicles = vehicles;
                state.snapshot.error = None;
                state.snapshot.fetched_at = Some(Utc::now());
            }
            Err(e) => {
                warn!("Feed cycle {} failed: {}", generation, e);
                state.snapshot.error = Some(e.user_message());
            }
        }

        state.snapshot.loading = false;
        state.cancel = None;
    }
}
