//! Authentication
//!
//! - [`JwtService`] - token issue / validation
//! - [`CurrentUser`] - caller context injected by [`require_auth`]
//! - [`password`] - Argon2 hashing for employee passwords

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService, generate_printable_secret};
pub use middleware::require_auth;
