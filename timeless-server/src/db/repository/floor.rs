//! Floor Repository

use async_trait::async_trait;
use shared::error::ErrorCode;
use shared::models::{Floor, FloorForm};
use sqlx::SqliteConnection;

use super::{Entity, RepoResult};

#[async_trait]
impl Entity for Floor {
    const TABLE: &'static str = "floor";
    const NOT_FOUND: ErrorCode = ErrorCode::FloorNotFound;
    type Form = FloorForm;

    fn id(&self) -> i64 {
        self.id
    }

    async fn insert(conn: &mut SqliteConnection, form: &FloorForm) -> RepoResult<i64> {
        let result = sqlx::query("INSERT INTO floor (location_id, description) VALUES (?, ?)")
            .bind(form.location_id)
            .bind(&form.description)
            .execute(conn)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(conn: &mut SqliteConnection, id: i64, form: &FloorForm) -> RepoResult<()> {
        sqlx::query("UPDATE floor SET location_id = ?, description = ? WHERE id = ?")
            .bind(form.location_id)
            .bind(&form.description)
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }
}
