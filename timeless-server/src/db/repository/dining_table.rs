//! Dining Table Repository

use async_trait::async_trait;
use shared::error::ErrorCode;
use shared::models::{DiningTable, DiningTableForm};
use sqlx::{SqliteConnection, SqlitePool};

use super::{Entity, RepoResult};

#[async_trait]
impl Entity for DiningTable {
    const TABLE: &'static str = "dining_table";
    const NOT_FOUND: ErrorCode = ErrorCode::TableNotFound;
    type Form = DiningTableForm;

    fn id(&self) -> i64 {
        self.id
    }

    async fn insert(conn: &mut SqliteConnection, form: &DiningTableForm) -> RepoResult<i64> {
        let result = sqlx::query(
            "INSERT INTO dining_table (name, floor_id, shape_id, x, y, width, height, status, max_capacity, multiple, playstation) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&form.name)
        .bind(form.floor_id)
        .bind(form.shape_id)
        .bind(form.x)
        .bind(form.y)
        .bind(form.width)
        .bind(form.height)
        .bind(form.status)
        .bind(form.max_capacity)
        .bind(form.multiple)
        .bind(form.playstation)
        .execute(conn)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(conn: &mut SqliteConnection, id: i64, form: &DiningTableForm) -> RepoResult<()> {
        sqlx::query(
            "UPDATE dining_table SET name = ?, floor_id = ?, shape_id = ?, x = ?, y = ?, width = ?, height = ?, status = ?, max_capacity = ?, multiple = ?, playstation = ? WHERE id = ?",
        )
        .bind(&form.name)
        .bind(form.floor_id)
        .bind(form.shape_id)
        .bind(form.x)
        .bind(form.y)
        .bind(form.width)
        .bind(form.height)
        .bind(form.status)
        .bind(form.max_capacity)
        .bind(form.multiple)
        .bind(form.playstation)
        .bind(id)
        .execute(conn)
        .await?;
        Ok(())
    }
}

/// Tables laid out on a floor
pub async fn find_by_floor(pool: &SqlitePool, floor_id: i64) -> RepoResult<Vec<DiningTable>> {
    let rows = sqlx::query_as::<_, DiningTable>(
        "SELECT * FROM dining_table WHERE floor_id = ? ORDER BY name",
    )
    .bind(floor_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
