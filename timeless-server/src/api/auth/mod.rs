//! Authentication Routes

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// `/api/auth/login` is public; it issues the bearer tokens the secured
/// routers check.
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/auth/login", post(handler::login))
}
