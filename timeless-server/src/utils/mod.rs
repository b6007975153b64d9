//! Utilities
//!
//! - [`logger`] - tracing subscriber setup
//! - [`AppError`] / [`ApiResponse`] - unified error types from `shared::error`

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
