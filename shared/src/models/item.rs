//! Item Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::serde_helpers;

/// Stock item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub stock_date: Option<NaiveDate>,
    pub comment: String,
    pub created_on: NaiveDate,
    pub updated_on: NaiveDate,
    pub company_id: Option<i64>,
}

/// Create/edit item payload
///
/// `created_on` / `updated_on` are stamped by the repository.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::opt_date")]
    pub stock_date: Option<NaiveDate>,
    #[serde(default)]
    pub comment: String,
    #[serde(default, deserialize_with = "serde_helpers::opt_int")]
    pub company_id: Option<i64>,
}

impl From<&Item> for ItemForm {
    fn from(i: &Item) -> Self {
        Self {
            name: i.name.clone(),
            stock_date: i.stock_date,
            comment: i.comment.clone(),
            company_id: i.company_id,
        }
    }
}
