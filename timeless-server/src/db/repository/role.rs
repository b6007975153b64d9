//! Role Repository

use async_trait::async_trait;
use shared::error::ErrorCode;
use shared::models::{Role, RoleForm};
use sqlx::SqliteConnection;

use super::{Entity, RepoResult};

#[async_trait]
impl Entity for Role {
    const TABLE: &'static str = "role";
    const NOT_FOUND: ErrorCode = ErrorCode::RoleNotFound;
    type Form = RoleForm;

    fn id(&self) -> i64 {
        self.id
    }

    async fn insert(conn: &mut SqliteConnection, form: &RoleForm) -> RepoResult<i64> {
        let result =
            sqlx::query("INSERT INTO role (name, works_on_shifts, company_id) VALUES (?, ?, ?)")
                .bind(&form.name)
                .bind(form.works_on_shifts)
                .bind(form.company_id)
                .execute(conn)
                .await?;
        Ok(result.last_insert_rowid())
    }

    async fn update(conn: &mut SqliteConnection, id: i64, form: &RoleForm) -> RepoResult<()> {
        sqlx::query("UPDATE role SET name = ?, works_on_shifts = ?, company_id = ? WHERE id = ?")
            .bind(&form.name)
            .bind(form.works_on_shifts)
            .bind(form.company_id)
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }
}
