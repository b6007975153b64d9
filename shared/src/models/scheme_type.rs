//! Scheme Type Model

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SchemeType {
    pub id: i64,
    pub description: String,
    pub default_value: String,
    pub value_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SchemeTypeForm {
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default)]
    pub default_value: String,
    #[validate(length(min = 1, message = "Value type is required"))]
    pub value_type: String,
}

impl From<&SchemeType> for SchemeTypeForm {
    fn from(s: &SchemeType) -> Self {
        Self {
            description: s.description.clone(),
            default_value: s.default_value.clone(),
            value_type: s.value_type.clone(),
        }
    }
}
