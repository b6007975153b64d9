//! Table Shape Repository

use async_trait::async_trait;
use shared::error::ErrorCode;
use shared::models::{TableShape, TableShapeForm};
use sqlx::SqliteConnection;

use super::{Entity, RepoResult};

#[async_trait]
impl Entity for TableShape {
    const TABLE: &'static str = "table_shape";
    const NOT_FOUND: ErrorCode = ErrorCode::TableShapeNotFound;
    type Form = TableShapeForm;

    fn id(&self) -> i64 {
        self.id
    }

    async fn insert(conn: &mut SqliteConnection, form: &TableShapeForm) -> RepoResult<i64> {
        let result = sqlx::query("INSERT INTO table_shape (description, picture) VALUES (?, ?)")
            .bind(&form.description)
            .bind(&form.picture)
            .execute(conn)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(conn: &mut SqliteConnection, id: i64, form: &TableShapeForm) -> RepoResult<()> {
        sqlx::query("UPDATE table_shape SET description = ?, picture = ? WHERE id = ?")
            .bind(&form.description)
            .bind(&form.picture)
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }
}
