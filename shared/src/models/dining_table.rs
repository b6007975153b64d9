//! Dining Table Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::serde_helpers;

/// Table status code: free
pub const TABLE_FREE: i32 = 0;
/// Table status code: occupied
pub const TABLE_OCCUPIED: i32 = 1;

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    pub name: String,
    pub floor_id: Option<i64>,
    pub shape_id: Option<i64>,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// 0 = free, 1 = occupied
    pub status: i32,
    pub max_capacity: i32,
    pub multiple: bool,
    pub playstation: bool,
}

/// Create/edit dining table payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTableForm {
    #[validate(length(min = 1, max = 300, message = "Name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::opt_int")]
    pub floor_id: Option<i64>,
    #[serde(default, deserialize_with = "serde_helpers::opt_int")]
    pub shape_id: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::int32")]
    pub x: i32,
    #[serde(deserialize_with = "serde_helpers::int32")]
    pub y: i32,
    #[serde(deserialize_with = "serde_helpers::int32")]
    #[validate(range(min = 0))]
    pub width: i32,
    #[serde(deserialize_with = "serde_helpers::int32")]
    #[validate(range(min = 0))]
    pub height: i32,
    #[serde(deserialize_with = "serde_helpers::int32")]
    #[validate(range(min = 0, max = 1, message = "Status must be 0 (free) or 1 (occupied)"))]
    pub status: i32,
    #[serde(deserialize_with = "serde_helpers::int32")]
    #[validate(range(min = 0))]
    pub max_capacity: i32,
    #[serde(default, deserialize_with = "serde_helpers::flag")]
    pub multiple: bool,
    #[serde(default, deserialize_with = "serde_helpers::flag")]
    pub playstation: bool,
}

impl From<&DiningTable> for DiningTableForm {
    fn from(t: &DiningTable) -> Self {
        Self {
            name: t.name.clone(),
            floor_id: t.floor_id,
            shape_id: t.shape_id,
            x: t.x,
            y: t.y,
            width: t.width,
            height: t.height,
            status: t.status,
            max_capacity: t.max_capacity,
            multiple: t.multiple,
            playstation: t.playstation,
        }
    }
}
