//! Comment API
//!
//! Full JSON CRUD at `/api/comments`; every route requires a bearer token.

use axum::{Router, middleware};
use shared::models::Comment;

use crate::auth::require_auth;
use crate::core::ServerState;
use crate::views::CrudApi;

pub fn router(state: &ServerState) -> Router<ServerState> {
    CrudApi::<Comment>::new("/api/comments")
        .router()
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}
