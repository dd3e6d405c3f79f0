//! `envmon-ingest` -- sensor reading ingestion server.
//!
//! Accepts `POST /data` from environmental sensors and appends each reading
//! to the CSV record store. See [`IngestConfig`] for environment variables.

use std::net::SocketAddr;
use std::sync::Arc;

use envmon_ingest::config::IngestConfig;
use envmon_ingest::router::build_app_router;
use envmon_ingest::state::AppState;
use envmon_server::shutdown::shutdown_signal;
use envmon_server::telemetry::init_tracing;
use envmon_store::CsvRecordStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing("envmon_ingest=debug,envmon_store=debug,envmon_server=info,tower_http=debug");

    // --- Configuration ---
    let config = IngestConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });
    tracing::info!(
        host = %config.host,
        port = config.port,
        store = %config.store_path.display(),
        "Loaded ingest configuration",
    );

    // --- Record store ---
    let store = CsvRecordStore::open(&config.store_path).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to open record store");
        std::process::exit(1);
    });

    // --- App state ---
    let state = AppState { store: Arc::new(store) };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = match config.host.parse() {
        Ok(ip) => SocketAddr::new(ip, config.port),
        Err(e) => {
            tracing::error!(host = %config.host, error = %e, "Invalid HOST address");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, "Starting ingest server");

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
