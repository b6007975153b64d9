//! Data models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).
//! Every entity has one `*Form` payload used for both create and edit.

pub mod comment;
pub mod company;
pub mod dining_table;
pub mod employee;
pub mod floor;
pub mod item;
pub mod location;
pub mod reservation;
pub mod reservation_settings;
pub mod role;
pub mod scheme_type;
pub mod serde_helpers;
pub mod table_shape;

// Re-exports
pub use comment::*;
pub use company::*;
pub use dining_table::*;
pub use employee::*;
pub use floor::*;
pub use item::*;
pub use location::*;
pub use reservation::*;
pub use reservation_settings::*;
pub use role::*;
pub use scheme_type::*;
pub use table_shape::*;
