use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use envmon_store::StoreError;
use serde_json::json;

use crate::page::render_error_page;

/// Application-level error type for dashboard handlers.
///
/// Implements [`IntoResponse`] as a JSON error envelope. Page handlers wrap
/// it in [`HtmlError`] to answer with an HTML document instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The record store could not be loaded.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status, error code and client-facing message.
    ///
    /// Store problems (missing file, missing column, no valid rows) are
    /// reported to the client since they describe the data, not the server.
    /// Everything else is logged and sanitized.
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Store(
                err @ (StoreError::NotFound { .. }
                | StoreError::MissingColumn { .. }
                | StoreError::EmptyDataset),
            ) => {
                tracing::error!(error = %err, "Sensor dataset unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATASET_UNAVAILABLE",
                    err.to_string(),
                )
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Record store error");
                internal()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();
        let body = json!({
            "error": message,
            "code": code,
        });
        (status, axum::Json(body)).into_response()
    }
}

/// An [`AppError`] rendered as an HTML error page.
#[derive(Debug)]
pub struct HtmlError(pub AppError);

impl From<AppError> for HtmlError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        let (status, _code, message) = self.0.classify();
        (status, Html(render_error_page(&message))).into_response()
    }
}
