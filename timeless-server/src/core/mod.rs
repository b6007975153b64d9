//! Core: configuration, shared state, server lifecycle

pub mod config;
pub mod logging;
pub mod server;
pub mod state;

pub use config::{Config, ConfigError};
pub use server::Server;
pub use state::ServerState;
