use thiserror::Error;

use crate::auth::JwtConfig;

/// Minimum accepted JWT secret length outside development
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set outside development")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_PATH | timeless.db | SQLite database file |
/// | HTTP_PORT | 5000 | HTTP listen port |
/// | LOG_LEVEL | info | Fallback log level when `RUST_LOG` is unset |
/// | LOG_DIR | (none) | Directory for daily rolling log files |
/// | ENVIRONMENT | development | development \| production |
/// | JWT_SECRET | generated in development | HMAC secret, at least 32 chars |
/// | JWT_EXPIRATION_MINUTES | 1440 | Token lifetime |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | Grace period for in-flight requests |
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub http_port: u16,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | production
    pub environment: String,
    pub jwt: JwtConfig,
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env_or("ENVIRONMENT", "development");
        let jwt = JwtConfig {
            secret: load_jwt_secret(environment == "development")?,
            expiration_minutes: env_parse("JWT_EXPIRATION_MINUTES", 1440)?,
            issuer: env_or("JWT_ISSUER", "timeless-server"),
            audience: env_or("JWT_AUDIENCE", "timeless-clients"),
        };

        Ok(Self {
            database_path: env_or("DATABASE_PATH", "timeless.db"),
            http_port: env_parse("HTTP_PORT", 5000)?,
            log_level: env_or("LOG_LEVEL", "info"),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment,
            jwt,
            shutdown_timeout_ms: env_parse("SHUTDOWN_TIMEOUT_MS", 10_000)?,
        })
    }

    /// Configuration for in-process tests: in-memory database, fixed secret
    pub fn for_tests() -> Self {
        Self {
            database_path: ":memory:".into(),
            http_port: 0,
            log_level: "debug".into(),
            log_dir: None,
            environment: "development".into(),
            jwt: JwtConfig {
                secret: "test-secret-that-is-long-enough-for-hs256".into(),
                expiration_minutes: 60,
                issuer: "timeless-server".into(),
                audience: "timeless-clients".into(),
            },
            shutdown_timeout_ms: 1000,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

fn load_jwt_secret(development: bool) -> Result<String, ConfigError> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) if secret.len() >= MIN_JWT_SECRET_LEN => Ok(secret),
        Ok(_) if !development => Err(ConfigError::Invalid {
            name: "JWT_SECRET",
            reason: format!("must be at least {MIN_JWT_SECRET_LEN} characters long"),
        }),
        Err(_) if !development => Err(ConfigError::Missing("JWT_SECRET")),
        _ => {
            tracing::warn!("JWT_SECRET not set or too short, generating a temporary development key");
            Ok(crate::auth::generate_printable_secret())
        }
    }
}
