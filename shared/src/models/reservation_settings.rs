//! Reservation Settings Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::reservation::{ReservationStatus, check_period};
use super::serde_helpers;

/// Reservation defaults for a table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ReservationSettings {
    pub id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub customer_id: Option<i64>,
    pub num_of_persons: i32,
    pub comment: String,
    pub status: ReservationStatus,
    pub multiple: bool,
    pub table_id: Option<i64>,
}

/// Create/edit payload; the table reference arrives as form field `tables`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_settings_period", skip_on_field_errors = false))]
pub struct ReservationSettingsForm {
    #[serde(deserialize_with = "serde_helpers::datetime")]
    pub start_time: NaiveDateTime,
    #[serde(deserialize_with = "serde_helpers::datetime")]
    pub end_time: NaiveDateTime,
    #[serde(default, deserialize_with = "serde_helpers::opt_int")]
    pub customer_id: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::int32")]
    #[validate(range(min = 1, message = "Number of persons must be positive"))]
    pub num_of_persons: i32,
    #[serde(default)]
    #[validate(length(max = 500, message = "Comment is too long"))]
    pub comment: String,
    pub status: ReservationStatus,
    #[serde(default, deserialize_with = "serde_helpers::flag")]
    pub multiple: bool,
    #[serde(rename = "tables", default, deserialize_with = "serde_helpers::opt_int")]
    pub table_id: Option<i64>,
}

fn validate_settings_period(form: &ReservationSettingsForm) -> Result<(), ValidationError> {
    check_period(form.start_time, form.end_time)
}

impl From<&ReservationSettings> for ReservationSettingsForm {
    fn from(s: &ReservationSettings) -> Self {
        Self {
            start_time: s.start_time,
            end_time: s.end_time,
            customer_id: s.customer_id,
            num_of_persons: s.num_of_persons,
            comment: s.comment.clone(),
            status: s.status,
            multiple: s.multiple,
            table_id: s.table_id,
        }
    }
}
