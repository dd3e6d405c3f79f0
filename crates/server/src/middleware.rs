//! The HTTP middleware stack both servers run behind.

use std::time::Duration;

use axum::http::{HeaderName, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wrap `router` in the middleware stack, applied bottom-up:
///
/// 1. Set request ID on incoming requests
/// 2. Structured request/response tracing
/// 3. Propagate request ID to response
/// 4. Request timeout
/// 5. Panic recovery (catch panics, return 500)
pub fn with_middleware<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    router
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
}
