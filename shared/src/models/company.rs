//! Company Model

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompanyForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
    #[serde(default)]
    pub address: String,
}

impl From<&Company> for CompanyForm {
    fn from(c: &Company) -> Self {
        Self {
            name: c.name.clone(),
            code: c.code.clone(),
            address: c.address.clone(),
        }
    }
}
