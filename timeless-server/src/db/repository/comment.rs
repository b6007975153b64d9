//! Reservation Comment Repository

use async_trait::async_trait;
use shared::error::ErrorCode;
use shared::models::{Comment, CommentForm};
use shared::util;
use sqlx::{SqliteConnection, SqlitePool};

use super::{Entity, RepoResult};

#[async_trait]
impl Entity for Comment {
    const TABLE: &'static str = "comment";
    const NOT_FOUND: ErrorCode = ErrorCode::CommentNotFound;
    type Form = CommentForm;

    fn id(&self) -> i64 {
        self.id
    }

    async fn insert(conn: &mut SqliteConnection, form: &CommentForm) -> RepoResult<i64> {
        let result =
            sqlx::query("INSERT INTO comment (reservation_id, body, date) VALUES (?, ?, ?)")
                .bind(form.reservation_id)
                .bind(&form.body)
                .bind(form.date.unwrap_or_else(util::now_naive))
                .execute(conn)
                .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(conn: &mut SqliteConnection, id: i64, form: &CommentForm) -> RepoResult<()> {
        sqlx::query(
            "UPDATE comment SET reservation_id = ?, body = ?, date = COALESCE(?, date) WHERE id = ?",
        )
        .bind(form.reservation_id)
        .bind(&form.body)
        .bind(form.date)
        .bind(id)
        .execute(conn)
        .await?;
        Ok(())
    }
}

pub async fn find_by_reservation(pool: &SqlitePool, reservation_id: i64) -> RepoResult<Vec<Comment>> {
    let rows = sqlx::query_as::<_, Comment>(
        "SELECT * FROM comment WHERE reservation_id = ? ORDER BY date, id",
    )
    .bind(reservation_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
