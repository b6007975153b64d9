//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::serde_helpers;

/// Maximum username length
pub const USERNAME_MAX_LEN: usize = 15;

/// Employee entity
///
/// `password` holds the Argon2 PHC string and is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub phone_number: String,
    pub birth_date: Option<NaiveDate>,
    pub registration_date: NaiveDate,
    pub account_status: String,
    pub user_status: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub pin_code: i32,
    pub comment: String,
    pub company_id: Option<i64>,
    pub role_id: Option<i64>,
}

/// Create/edit employee payload
///
/// `password` is plain text here. It is required on create; an empty value
/// on edit keeps the stored hash.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeeForm {
    #[validate(length(min = 1, max = 300, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 300, message = "Last name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, max = 15, message = "Username must be 1-15 characters"))]
    pub username: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default, deserialize_with = "serde_helpers::opt_date")]
    pub birth_date: Option<NaiveDate>,
    /// Defaults to today when absent
    #[serde(default, deserialize_with = "serde_helpers::opt_date")]
    pub registration_date: Option<NaiveDate>,
    #[serde(default)]
    pub account_status: String,
    #[serde(default)]
    pub user_status: String,
    #[validate(email(message = "Not a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(deserialize_with = "serde_helpers::int32")]
    #[validate(range(min = 1, max = 9999, message = "PIN code must be between 1 and 9999"))]
    pub pin_code: i32,
    #[serde(default)]
    pub comment: String,
    #[serde(default, deserialize_with = "serde_helpers::opt_int")]
    pub company_id: Option<i64>,
    #[serde(default, deserialize_with = "serde_helpers::opt_int")]
    pub role_id: Option<i64>,
}

impl From<&Employee> for EmployeeForm {
    fn from(e: &Employee) -> Self {
        Self {
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            username: e.username.clone(),
            phone_number: e.phone_number.clone(),
            birth_date: e.birth_date,
            registration_date: Some(e.registration_date),
            account_status: e.account_status.clone(),
            user_status: e.user_status.clone(),
            email: e.email.clone(),
            password: String::new(),
            pin_code: e.pin_code,
            comment: e.comment.clone(),
            company_id: e.company_id,
            role_id: e.role_id,
        }
    }
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Login response (token plus the public employee view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: i64,
    pub employee: Employee,
}
