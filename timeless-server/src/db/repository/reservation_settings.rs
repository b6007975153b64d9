//! Reservation Settings Repository

use async_trait::async_trait;
use shared::error::ErrorCode;
use shared::models::{ReservationSettings, ReservationSettingsForm};
use sqlx::SqliteConnection;

use super::{Entity, RepoResult};

#[async_trait]
impl Entity for ReservationSettings {
    const TABLE: &'static str = "reservation_settings";
    const NOT_FOUND: ErrorCode = ErrorCode::ReservationSettingsNotFound;
    type Form = ReservationSettingsForm;

    fn id(&self) -> i64 {
        self.id
    }

    async fn insert(conn: &mut SqliteConnection, form: &ReservationSettingsForm) -> RepoResult<i64> {
        let result = sqlx::query(
            "INSERT INTO reservation_settings (start_time, end_time, customer_id, num_of_persons, comment, status, multiple, table_id) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(form.start_time)
        .bind(form.end_time)
        .bind(form.customer_id)
        .bind(form.num_of_persons)
        .bind(&form.comment)
        .bind(form.status)
        .bind(form.multiple)
        .bind(form.table_id)
        .execute(conn)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        form: &ReservationSettingsForm,
    ) -> RepoResult<()> {
        sqlx::query(
            "UPDATE reservation_settings SET start_time = ?, end_time = ?, customer_id = ?, num_of_persons = ?, comment = ?, status = ?, multiple = ?, table_id = ? WHERE id = ?",
        )
        .bind(form.start_time)
        .bind(form.end_time)
        .bind(form.customer_id)
        .bind(form.num_of_persons)
        .bind(&form.comment)
        .bind(form.status)
        .bind(form.multiple)
        .bind(form.table_id)
        .bind(id)
        .execute(conn)
        .await?;
        Ok(())
    }
}
