//! Item Repository

use async_trait::async_trait;
use shared::error::ErrorCode;
use shared::models::{Item, ItemForm};
use shared::util;
use sqlx::SqliteConnection;

use super::{Entity, RepoResult};

#[async_trait]
impl Entity for Item {
    const TABLE: &'static str = "item";
    const NOT_FOUND: ErrorCode = ErrorCode::ItemNotFound;
    type Form = ItemForm;

    fn id(&self) -> i64 {
        self.id
    }

    /// Stamps `created_on` and `updated_on` with today's date
    async fn insert(conn: &mut SqliteConnection, form: &ItemForm) -> RepoResult<i64> {
        let today = util::today();
        let result = sqlx::query(
            "INSERT INTO item (name, stock_date, comment, created_on, updated_on, company_id) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&form.name)
        .bind(form.stock_date)
        .bind(&form.comment)
        .bind(today)
        .bind(today)
        .bind(form.company_id)
        .execute(conn)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Refreshes `updated_on`; `created_on` is left as stored
    async fn update(conn: &mut SqliteConnection, id: i64, form: &ItemForm) -> RepoResult<()> {
        sqlx::query(
            "UPDATE item SET name = ?, stock_date = ?, comment = ?, updated_on = ?, company_id = ? WHERE id = ?",
        )
        .bind(&form.name)
        .bind(form.stock_date)
        .bind(&form.comment)
        .bind(util::today())
        .bind(form.company_id)
        .bind(id)
        .execute(conn)
        .await?;
        Ok(())
    }
}
