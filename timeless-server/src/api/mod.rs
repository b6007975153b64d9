//! HTTP routes
//!
//! - [`health`] - liveness probe
//! - [`auth`] - employee login
//! - [`reservations`] - reservation pages, settings CRUD, demo JSON
//! - [`comments`] - secured comment JSON API
//! - [`resources`] - generic HTML CRUD for the remaining entities

pub mod auth;
pub mod comments;
pub mod health;
pub mod reservations;
pub mod resources;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::core::logging::logging_middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Every route, without middleware or state
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(reservations::router())
        .merge(comments::router(state))
        .merge(resources::router())
}

/// Fully layered application, used by the server and by in-process tests
pub fn build_app(state: &ServerState) -> Router {
    build_router(state)
        .layer(CorsLayer::permissive())
        // Request logging, sees the request id set below
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        // Last layer added runs first: set the id, then copy it onto the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state.clone())
}
