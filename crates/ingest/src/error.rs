use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use envmon_store::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Ingestion never rejects a payload, so every variant here is a server-side
/// failure. Details are logged and never returned to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The record store could not be written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(err) => tracing::error!(error = %err, "Record store error"),
            AppError::InternalError(msg) => tracing::error!(error = %msg, "Internal error"),
        }

        let body = json!({
            "error": "An internal error occurred",
            "code": "INTERNAL_ERROR",
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
