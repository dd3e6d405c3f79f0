//! `envmon-dashboard` -- environmental health dashboard.
//!
//! Loads the sensor record store, computes the health score and serves the
//! dashboard page. The store is validated once at startup: a missing file,
//! a missing required column or a dataset with no valid rows aborts the
//! process before anything is served. See [`DashboardConfig`] for
//! environment variables.

use std::net::SocketAddr;
use std::sync::Arc;

use envmon_dashboard::config::DashboardConfig;
use envmon_dashboard::report::build_report;
use envmon_dashboard::router::build_app_router;
use envmon_dashboard::state::AppState;
use envmon_server::shutdown::shutdown_signal;
use envmon_server::telemetry::init_tracing;
use envmon_store::{load_dataset, CsvRecordStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing("envmon_dashboard=debug,envmon_store=debug,envmon_server=info,tower_http=debug");

    // --- Configuration ---
    let config = DashboardConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });
    let thresholds = config.load_thresholds().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid threshold configuration");
        std::process::exit(1);
    });
    tracing::info!(
        host = %config.host,
        port = config.port,
        store = %config.store_path.display(),
        sensors = thresholds.entries().len(),
        "Loaded dashboard configuration",
    );

    // --- Startup load (fatal on failure) ---
    let store = CsvRecordStore::new(&config.store_path);
    let readings = load_dataset(&store).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load sensor dataset");
        std::process::exit(1);
    });
    let report = build_report(&readings, &thresholds);
    tracing::info!(
        overall_score = report.overall_score,
        status = report.status.label,
        readings = report.reading_count,
        "Computed environmental health score",
    );

    // --- App state ---
    let state = AppState {
        store: Arc::new(store),
        thresholds: Arc::new(thresholds),
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = match config.host.parse() {
        Ok(ip) => SocketAddr::new(ip, config.port),
        Err(e) => {
            tracing::error!(host = %config.host, error = %e, "Invalid HOST address");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, "Starting dashboard server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(%addr, error = %e, "Failed to bind to address");
            std::process::exit(1);
        });

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }

    tracing::info!("Graceful shutdown complete");
}
