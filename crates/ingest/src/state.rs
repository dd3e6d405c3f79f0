use std::sync::Arc;

use envmon_store::RecordStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Record store every accepted reading is appended to.
    pub store: Arc<dyn RecordStore>,
}
