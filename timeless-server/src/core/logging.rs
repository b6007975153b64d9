//! Request logging middleware

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

/// Log one line per completed request under the `http_access` target
///
/// Carries the `x-request-id` set by the request-id layer, method, matched
/// route, status and latency.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        warn!(target: "http_access", %request_id, %method, %path, status, latency_ms, "Request completed with server error");
    } else if response.status().is_client_error() {
        warn!(target: "http_access", %request_id, %method, %path, status, latency_ms, "Request completed with client error");
    } else {
        info!(target: "http_access", %request_id, %method, %path, status, latency_ms, "Request completed");
    }

    response
}
