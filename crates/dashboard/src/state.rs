use std::sync::Arc;

use envmon_core::thresholds::ThresholdConfig;
use envmon_store::RecordStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Record store read on every page load.
    pub store: Arc<dyn RecordStore>,
    /// Thresholds used for scoring and chart overlays.
    pub thresholds: Arc<ThresholdConfig>,
}
