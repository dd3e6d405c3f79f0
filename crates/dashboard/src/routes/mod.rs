use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Build the dashboard route tree.
///
/// ```text
/// GET /           dashboard page (HTML)
/// GET /report     dashboard report (JSON)
/// ```
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard_page))
        .route("/report", get(dashboard::report_json))
}
