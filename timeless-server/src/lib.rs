//! Timeless Server - restaurant management back office
//!
//! Server-rendered CRUD pages for reservations and the entities around them
//! (tables, floors, locations, companies, employees, ...), plus a small JSON
//! API.
//!
//! ```text
//! timeless-server/src/
//! ├── core/    # config, state, server, request logging
//! ├── auth/    # JWT + Argon2
//! ├── db/      # SQLite pool and repositories
//! ├── views/   # templates, flash, generic CRUD builders
//! ├── api/     # HTTP routes and handlers
//! └── utils/   # logger, error re-exports
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;
pub mod views;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Structured security event under the `security` target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
 _____ _                _
|_   _(_)_ __ ___   ___| | ___  ___ ___
  | | | | '_ ` _ \ / _ \ |/ _ \/ __/ __|
  | | | | | | | | |  __/ |  __/\__ \__ \
  |_| |_|_| |_| |_|\___|_|\___||___/___/
    "#
    );
}
