//! Scheme Type Repository

use async_trait::async_trait;
use shared::error::ErrorCode;
use shared::models::{SchemeType, SchemeTypeForm};
use sqlx::SqliteConnection;

use super::{Entity, RepoResult};

#[async_trait]
impl Entity for SchemeType {
    const TABLE: &'static str = "scheme_type";
    const NOT_FOUND: ErrorCode = ErrorCode::SchemeTypeNotFound;
    type Form = SchemeTypeForm;

    fn id(&self) -> i64 {
        self.id
    }

    async fn insert(conn: &mut SqliteConnection, form: &SchemeTypeForm) -> RepoResult<i64> {
        let result = sqlx::query(
            "INSERT INTO scheme_type (description, default_value, value_type) VALUES (?, ?, ?)",
        )
        .bind(&form.description)
        .bind(&form.default_value)
        .bind(&form.value_type)
        .execute(conn)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(conn: &mut SqliteConnection, id: i64, form: &SchemeTypeForm) -> RepoResult<()> {
        sqlx::query(
            "UPDATE scheme_type SET description = ?, default_value = ?, value_type = ? WHERE id = ?",
        )
        .bind(&form.description)
        .bind(&form.default_value)
        .bind(&form.value_type)
        .bind(id)
        .execute(conn)
        .await?;
        Ok(())
    }
}
