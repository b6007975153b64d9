//! Location Repository

use async_trait::async_trait;
use shared::error::ErrorCode;
use shared::models::{Location, LocationForm};
use sqlx::SqliteConnection;

use super::{Entity, RepoResult};

#[async_trait]
impl Entity for Location {
    const TABLE: &'static str = "location";
    const NOT_FOUND: ErrorCode = ErrorCode::LocationNotFound;
    type Form = LocationForm;

    fn id(&self) -> i64 {
        self.id
    }

    async fn insert(conn: &mut SqliteConnection, form: &LocationForm) -> RepoResult<i64> {
        let result = sqlx::query(
            "INSERT INTO location (name, code, company_id, country, region, city, address, longitude, latitude, type, status, comment) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&form.name)
        .bind(&form.code)
        .bind(form.company_id)
        .bind(&form.country)
        .bind(&form.region)
        .bind(&form.city)
        .bind(&form.address)
        .bind(&form.longitude)
        .bind(&form.latitude)
        .bind(&form.kind)
        .bind(&form.status)
        .bind(&form.comment)
        .execute(conn)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Ownership (`company_id`) is kept when the form leaves it empty
    async fn update(conn: &mut SqliteConnection, id: i64, form: &LocationForm) -> RepoResult<()> {
        sqlx::query(
            "UPDATE location SET name = ?, code = ?, company_id = COALESCE(?, company_id), country = ?, region = ?, city = ?, address = ?, longitude = ?, latitude = ?, type = ?, status = ?, comment = ? WHERE id = ?",
        )
        .bind(&form.name)
        .bind(&form.code)
        .bind(form.company_id)
        .bind(&form.country)
        .bind(&form.region)
        .bind(&form.city)
        .bind(&form.address)
        .bind(&form.longitude)
        .bind(&form.latitude)
        .bind(&form.kind)
        .bind(&form.status)
        .bind(&form.comment)
        .bind(id)
        .execute(conn)
        .await?;
        Ok(())
    }
}
