#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use envmon_core::thresholds::ThresholdConfig;
use envmon_dashboard::config::DashboardConfig;
use envmon_dashboard::router::build_app_router;
use envmon_dashboard::state::AppState;
use envmon_store::{CsvRecordStore, RecordStore};

/// Header row of the record store file.
pub const HEADER: &str = "Temperature,Humidity,Sound,Timestamp\n";

/// Build a test `DashboardConfig` pointing at `store_path`.
pub fn test_config(store_path: &Path) -> DashboardConfig {
    DashboardConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        store_path: store_path.to_path_buf(),
        thresholds_file: None,
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the CSV file at `store_path`.
pub fn build_test_app(store_path: &Path) -> Router {
    build_app_with_store(Arc::new(CsvRecordStore::new(store_path)), store_path)
}

pub fn build_app_with_store(store: Arc<dyn RecordStore>, store_path: &Path) -> Router {
    let config = test_config(store_path);
    let state = AppState {
        store,
        thresholds: Arc::new(ThresholdConfig::default()),
    };
    build_app_router(state, &config)
}

/// Write a store file containing the header followed by `rows`.
pub fn write_store(path: &Path, rows: &[&str]) {
    let mut contents = HEADER.to_string();
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    std::fs::write(path, contents).expect("store file should be written");
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).expect("body should be JSON")
}
