//! Company Repository

use async_trait::async_trait;
use shared::error::ErrorCode;
use shared::models::{Company, CompanyForm};
use sqlx::SqliteConnection;

use super::{Entity, RepoResult};

#[async_trait]
impl Entity for Company {
    const TABLE: &'static str = "company";
    const NOT_FOUND: ErrorCode = ErrorCode::CompanyNotFound;
    type Form = CompanyForm;

    fn id(&self) -> i64 {
        self.id
    }

    async fn insert(conn: &mut SqliteConnection, form: &CompanyForm) -> RepoResult<i64> {
        let result = sqlx::query("INSERT INTO company (name, code, address) VALUES (?, ?, ?)")
            .bind(&form.name)
            .bind(&form.code)
            .bind(&form.address)
            .execute(conn)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(conn: &mut SqliteConnection, id: i64, form: &CompanyForm) -> RepoResult<()> {
        sqlx::query("UPDATE company SET name = ?, code = ?, address = ? WHERE id = ?")
            .bind(&form.name)
            .bind(&form.code)
            .bind(&form.address)
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }
}
