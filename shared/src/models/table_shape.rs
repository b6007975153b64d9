//! Table Shape Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Table shape entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TableShape {
    pub id: i64,
    pub description: String,
    pub picture: String,
}

/// Create/edit table shape payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TableShapeForm {
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub description: String,
    #[validate(length(min = 1, message = "Picture is required"))]
    pub picture: String,
}

impl From<&TableShape> for TableShapeForm {
    fn from(s: &TableShape) -> Self {
        Self {
            description: s.description.clone(),
            picture: s.picture.clone(),
        }
    }
}
