//! Floor Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::serde_helpers;

/// Floor entity (belongs to a location)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Floor {
    pub id: i64,
    pub location_id: Option<i64>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FloorForm {
    #[serde(default, deserialize_with = "serde_helpers::opt_int")]
    pub location_id: Option<i64>,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub description: String,
}

impl From<&Floor> for FloorForm {
    fn from(f: &Floor) -> Self {
        Self {
            location_id: f.location_id,
            description: f.description.clone(),
        }
    }
}
