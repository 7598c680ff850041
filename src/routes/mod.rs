use axum::Router;

use crate::{Config, FeedOrchestrator};

mod feed_target;
mod get_vehicles;
mod health;
mod proxy;

// ---

/// Shared state handed to every route.
pub type AppState = (FeedOrchestrator, Config);

pub fn router(orchestrator: FeedOrchestrator, config: Config) -> Router {
    // ---
    Router::new()
        .merge(proxy::router())
        .merge(get_vehicles::router())
        .merge(feed_target::router())
        .merge(health::router())
        .with_state((orchestrator, config))
}
