//! Role Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::serde_helpers;

/// Employee role entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub works_on_shifts: bool,
    pub company_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoleForm {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::flag")]
    pub works_on_shifts: bool,
    #[serde(default, deserialize_with = "serde_helpers::opt_int")]
    pub company_id: Option<i64>,
}

impl From<&Role> for RoleForm {
    fn from(r: &Role) -> Self {
        Self {
            name: r.name.clone(),
            works_on_shifts: r.works_on_shifts,
            company_id: r.company_id,
        }
    }
}
