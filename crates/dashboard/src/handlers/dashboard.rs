//! Handlers for the dashboard page and its JSON report.
//!
//! Every request re-reads the record store, so the page always reflects the
//! latest ingested readings.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use envmon_store::load_dataset;

use crate::error::{AppError, AppResult, HtmlError};
use crate::page::render_dashboard;
use crate::report::{build_report, Report};
use crate::state::AppState;

/// Load the store and run the analysis pipeline off the async runtime.
pub async fn load_report(state: &AppState) -> AppResult<Report> {
    let store = Arc::clone(&state.store);
    let thresholds = Arc::clone(&state.thresholds);

    tokio::task::spawn_blocking(move || -> AppResult<Report> {
        let readings = load_dataset(store.as_ref())?;
        Ok(build_report(&readings, &thresholds))
    })
    .await
    .map_err(|e| AppError::InternalError(format!("report task failed: {e}")))?
}

/// GET /
///
/// Render the dashboard page.
pub async fn dashboard_page(State(state): State<AppState>) -> Result<Html<String>, HtmlError> {
    let report = load_report(&state).await?;
    let html = render_dashboard(&report)
        .map_err(|e| AppError::InternalError(format!("failed to serialize charts: {e}")))?;
    Ok(Html(html))
}

/// GET /report
///
/// The same report as JSON.
pub async fn report_json(State(state): State<AppState>) -> AppResult<Json<Report>> {
    Ok(Json(load_report(&state).await?))
}
