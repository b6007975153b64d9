//! Repository Module
//!
//! Free functions over `&SqlitePool` / `&mut SqliteConnection`, plus the
//! [`Entity`] descriptor that lets one set of generic queries and views
//! serve every table. Mutating callers own the transaction: they `begin()`,
//! pass `&mut *tx` down, and `commit()`; dropping the transaction rolls back.

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
pub mod table_shape;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqliteConnection, SqliteExecutor, SqlitePool};
use thiserror::Error;
use validator::Validate;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Unique violation the entity reports with its own code
    #[error("Conflict: {0}")]
    Conflict(ErrorCode),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            sqlx::Error::Database(db) if db.is_check_violation() || db.is_foreign_key_violation() => {
                RepoError::Validation(db.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Conflict(code) => AppError::new(code),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Storage descriptor for a persisted model
///
/// `TABLE` is a compile-time constant, so formatting it into SQL is safe.
#[async_trait]
pub trait Entity: Serialize + for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static {
    /// Table name
    const TABLE: &'static str;
    /// Error code reported when a row is missing
    const NOT_FOUND: ErrorCode;

    /// Create/edit payload
    type Form: Serialize + DeserializeOwned + Validate + Send + Sync + 'static;

    fn id(&self) -> i64;

    /// Insert a row from a validated form, returning the new id
    async fn insert(conn: &mut SqliteConnection, form: &Self::Form) -> RepoResult<i64>;

    /// Overwrite row `id` from a validated form
    async fn update(conn: &mut SqliteConnection, id: i64, form: &Self::Form) -> RepoResult<()>;
}

/// All rows ordered by id
pub async fn find_all<E: Entity>(pool: &SqlitePool) -> RepoResult<Vec<E>> {
    let sql = format!("SELECT * FROM {} ORDER BY id", E::TABLE);
    let rows = sqlx::query_as::<_, E>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id<'c, E: Entity>(
    executor: impl SqliteExecutor<'c>,
    id: i64,
) -> RepoResult<Option<E>> {
    let sql = format!("SELECT * FROM {} WHERE id = ?", E::TABLE);
    let row = sqlx::query_as::<_, E>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;
    Ok(row)
}

/// Delete row `id`; `false` when nothing matched
pub async fn delete<'c, E: Entity>(executor: impl SqliteExecutor<'c>, id: i64) -> RepoResult<bool> {
    let sql = format!("DELETE FROM {} WHERE id = ?", E::TABLE);
    let result = sqlx::query(&sql).bind(id).execute(executor).await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count<E: Entity>(pool: &SqlitePool) -> RepoResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", E::TABLE);
    let (n,): (i64,) = sqlx::query_as(&sql).fetch_one(pool).await?;
    Ok(n)
}

/// Insert inside its own transaction and return the stored row
pub async fn create<E: Entity>(pool: &SqlitePool, form: &E::Form) -> RepoResult<E> {
    let mut tx = pool.begin().await?;
    let id = E::insert(&mut *tx, form).await?;
    let row = find_by_id::<E>(&mut *tx, id)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Failed to read back {} {id}", E::TABLE)))?;
    tx.commit().await?;
    Ok(row)
}

/// Update inside its own transaction and return the stored row
pub async fn update<E: Entity>(pool: &SqlitePool, id: i64, form: &E::Form) -> RepoResult<E> {
    let mut tx = pool.begin().await?;
    if find_by_id::<E>(&mut *tx, id).await?.is_none() {
        return Err(RepoError::NotFound(format!("{} {id}", E::TABLE)));
    }
    E::update(&mut *tx, id, form).await?;
    let row = find_by_id::<E>(&mut *tx, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("{} {id}", E::TABLE)))?;
    tx.commit().await?;
    Ok(row)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::db::DbService;
    use sqlx::SqlitePool;

    /// Migrated in-memory pool
    pub async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::test_pool;
    use super::*;
    use shared::models::{Company, CompanyForm};

    fn company(name: &str) -> CompanyForm {
        CompanyForm {
            name: name.into(),
            code: "C-1".into(),
            address: "Main street 1".into(),
        }
    }

    #[tokio::test]
    async fn test_create_find_delete() {
        let pool = test_pool().await;
        let created = create::<Company>(&pool, &company("Timeless Ltd")).await.unwrap();
        assert_eq!(created.name, "Timeless Ltd");

        let found = find_by_id::<Company>(&pool, created.id).await.unwrap();
        assert!(found.is_some());
        assert_eq!(count::<Company>(&pool).await.unwrap(), 1);

        assert!(delete::<Company>(&pool, created.id).await.unwrap());
        assert!(!delete::<Company>(&pool, created.id).await.unwrap());
        assert!(find_all::<Company>(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let pool = test_pool().await;
        let err = update::<Company>(&pool, 42, &company("Nobody")).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_dropped_transaction_rolls_back() {
        let pool = test_pool().await;
        {
            let mut tx = pool.begin().await.unwrap();
            Company::insert(&mut *tx, &company("Ghost")).await.unwrap();
        }
        assert_eq!(count::<Company>(&pool).await.unwrap(), 0);
    }

    #[test]
    fn test_repo_error_to_app_error() {
        let err: AppError = RepoError::Duplicate("username".into()).into();
        assert_eq!(err.code, ErrorCode::AlreadyExists);
        let err: AppError = RepoError::Conflict(ErrorCode::EmployeeUsernameExists).into();
        assert_eq!(err.code, ErrorCode::EmployeeUsernameExists);
        assert_eq!(err.message, "Employee username already exists");
        let err: AppError = RepoError::Validation("CHECK constraint failed".into()).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
