use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;
use crate::views::Templates;

/// Shared server state, cloned into every handler
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub pool: SqlitePool,
    pub templates: Templates,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Open the database, run migrations and register templates
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Self::with_pool(config, db.pool)
    }

    pub fn with_pool(config: &Config, pool: SqlitePool) -> Result<Self, AppError> {
        Ok(Self {
            config: Arc::new(config.clone()),
            pool,
            templates: Templates::new()?,
            jwt_service: Arc::new(JwtService::with_config(config.jwt.clone())),
        })
    }

    /// State over a fresh in-memory database with test configuration
    pub async fn for_tests() -> Result<Self, AppError> {
        let db = DbService::in_memory().await?;
        Self::with_pool(&Config::for_tests(), db.pool)
    }

    pub fn get_jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}
