//! Location Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::serde_helpers;

/// Restaurant location entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub company_id: Option<i64>,
    pub country: String,
    pub region: String,
    pub city: String,
    pub address: String,
    pub longitude: String,
    pub latitude: String,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "db", sqlx(rename = "type"))]
    pub kind: String,
    pub status: String,
    pub comment: String,
}

/// Create/edit location payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
    #[serde(default, deserialize_with = "serde_helpers::opt_int")]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub comment: String,
}

impl From<&Location> for LocationForm {
    fn from(l: &Location) -> Self {
        Self {
            name: l.name.clone(),
            code: l.code.clone(),
            company_id: l.company_id,
            country: l.country.clone(),
            region: l.region.clone(),
            city: l.city.clone(),
            address: l.address.clone(),
            longitude: l.longitude.clone(),
            latitude: l.latitude.clone(),
            kind: l.kind.clone(),
            status: l.status.clone(),
            comment: l.comment.clone(),
        }
    }
}
