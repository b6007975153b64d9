//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use shared::models::{LoginRequest, LoginResponse};

use crate::auth::password;
use crate::core::ServerState;
use crate::db::repository::employee;
use crate::security_log;
use crate::utils::{AppError, ErrorCode};

/// Applied to every attempt so timing does not reveal which usernames exist
const AUTH_FIXED_DELAY_MS: u64 = 300;

const DISABLED_STATUS: &str = "disabled";

/// Verify employee credentials and issue a JWT
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let employee = employee::find_by_username(&state.pool, &req.username).await?;

    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let Some(employee) = employee else {
        security_log!("WARN", "login_failed", username = req.username.as_str(), reason = "unknown_user");
        return Err(AppError::invalid_credentials());
    };

    let valid = password::verify_password(&req.password, &employee.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !valid {
        security_log!("WARN", "login_failed", username = req.username.as_str(), reason = "bad_password");
        return Err(AppError::invalid_credentials());
    }

    if employee.account_status.eq_ignore_ascii_case(DISABLED_STATUS) {
        security_log!("WARN", "login_disabled", username = req.username.as_str());
        return Err(AppError::new(ErrorCode::AccountDisabled));
    }

    let (token, expires_at) = state
        .get_jwt_service()
        .generate_token(employee.id, &employee.username, employee.role_id)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(
        user_id = employee.id,
        username = %employee.username,
        "User logged in successfully"
    );

    Ok(Json(LoginResponse {
        token,
        expires_at,
        employee,
    }))
}
