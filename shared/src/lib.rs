//! Shared types for the Timeless server
//!
//! Domain models with their form payloads, the unified error type and
//! response envelope, time helpers, and (behind the `factories` feature)
//! randomized data factories for tests.

pub mod error;
#[cfg(feature = "factories")]
pub mod factories;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
