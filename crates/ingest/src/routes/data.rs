use axum::routing::post;
use axum::Router;

use crate::handlers::data;
use crate::state::AppState;

/// Mount the ingestion endpoint at the root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/data", post(data::receive_data))
}
