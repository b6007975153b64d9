//! Reservation Comment Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::serde_helpers;

/// Comment attached to a reservation; deleted together with it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Comment {
    pub id: i64,
    pub reservation_id: i64,
    pub body: String,
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentForm {
    #[serde(deserialize_with = "serde_helpers::int")]
    pub reservation_id: i64,
    #[validate(length(min = 1, max = 500, message = "Comment body must be 1-500 characters"))]
    pub body: String,
    /// Defaults to now when absent
    #[serde(default, deserialize_with = "serde_helpers::opt_datetime")]
    pub date: Option<NaiveDateTime>,
}

impl From<&Comment> for CommentForm {
    fn from(c: &Comment) -> Self {
        Self {
            reservation_id: c.reservation_id,
            body: c.body.clone(),
            date: Some(c.date),
        }
    }
}
