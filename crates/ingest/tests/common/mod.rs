#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use envmon_ingest::config::IngestConfig;
use envmon_ingest::router::build_app_router;
use envmon_ingest::state::AppState;
use envmon_store::{CsvRecordStore, RecordStore};

/// Build a test `IngestConfig` pointing at `store_path`.
pub fn test_config(store_path: &Path) -> IngestConfig {
    IngestConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        store_path: store_path.to_path_buf(),
        request_timeout_secs: 30,
    }
}

/// A router backed by a fresh CSV store inside a temporary directory.
///
/// The directory is returned so it outlives the test body.
pub struct TestApp {
    pub dir: tempfile::TempDir,
    pub store_path: PathBuf,
    pub store: Arc<CsvRecordStore>,
    pub router: Router,
}

pub fn build_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let store_path = dir.path().join("sensor_data.csv");
    let store = Arc::new(CsvRecordStore::open(&store_path).expect("store should open"));
    let router = build_app_with_store(store.clone(), &store_path);

    TestApp {
        dir,
        store_path,
        store,
        router,
    }
}

/// Build the full middleware stack around an arbitrary store.
pub fn build_app_with_store(store: Arc<dyn RecordStore>, store_path: &Path) -> Router {
    let config = test_config(store_path);
    let state = AppState { store };
    build_app_router(state, &config)
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
