pub mod data;

use axum::Router;

use crate::state::AppState;

/// Build the ingestion route tree.
///
/// ```text
/// POST /data      store one sensor reading
/// ```
pub fn ingest_routes() -> Router<AppState> {
    Router::new().merge(data::router())
}
