//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests use the exact same middleware stack.

use std::time::Duration;

use axum::Router;
use envmon_server::middleware::with_middleware;

use crate::config::IngestConfig;
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`] with all middleware layers.
pub fn build_app_router(state: AppState, config: &IngestConfig) -> Router {
    let routes = routes::ingest_routes();
    with_middleware(routes, Duration::from_secs(config.request_timeout_secs)).with_state(state)
}
