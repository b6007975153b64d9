//! HTML and JSON view layer
//!
//! Generic CRUD builders plus the pieces they are made of: the template
//! registry, flash messages, urlencoded form decoding and per-entity
//! view descriptors.

pub mod api;
pub mod crud;
pub mod flash;
pub mod form;
pub mod resource;
pub mod templates;

pub use api::CrudApi;
pub use crud::{CrudViews, ViewTemplates};
pub use flash::Flash;
pub use resource::{FieldKind, FieldView, FormField, Resource};
pub use templates::Templates;
