//! Authentication middleware
//!
//! Attach with `route_layer(middleware::from_fn_with_state(state, require_auth))`
//! on routers that must only serve authenticated callers.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Require a valid `Authorization: Bearer <token>` header
///
/// On success the [`CurrentUser`] is inserted into the request extensions.
///
/// | Failure | Response |
/// |---------|----------|
/// | No Authorization header | 401 NotAuthenticated |
/// | Malformed header / bad token | 401 TokenInvalid |
/// | Expired token | 401 TokenExpired |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = req.uri().to_string());
            return Err(AppError::unauthorized());
        }
    };

    let claims = match state.jwt_service.validate_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = e.to_string(),
                uri = req.uri().to_string()
            );
            return Err(match e {
                JwtError::ExpiredToken => AppError::token_expired(),
                _ => AppError::invalid_token("Invalid token"),
            });
        }
    };

    let user = CurrentUser::try_from(claims)
        .map_err(|e| AppError::invalid_token(format!("Malformed JWT claims: {e}")))?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
