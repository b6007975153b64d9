//! Employee Repository

use async_trait::async_trait;
use shared::error::ErrorCode;
use shared::models::{Employee, EmployeeForm};
use shared::util;
use sqlx::{SqliteConnection, SqlitePool};

use super::{Entity, RepoError, RepoResult};
use crate::auth::password;

#[async_trait]
impl Entity for Employee {
    const TABLE: &'static str = "employee";
    const NOT_FOUND: ErrorCode = ErrorCode::EmployeeNotFound;
    type Form = EmployeeForm;

    fn id(&self) -> i64 {
        self.id
    }

    /// Hashes the plain-text password; an empty password is rejected
    async fn insert(conn: &mut SqliteConnection, form: &EmployeeForm) -> RepoResult<i64> {
        if form.password.is_empty() {
            return Err(RepoError::Validation("Password is required".into()));
        }
        let hash = password::hash_password(&form.password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?;

        let result = sqlx::query(
            "INSERT INTO employee (first_name, last_name, username, phone_number, birth_date, registration_date, account_status, user_status, email, password, pin_code, comment, company_id, role_id) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&form.first_name)
        .bind(&form.last_name)
        .bind(&form.username)
        .bind(&form.phone_number)
        .bind(form.birth_date)
        .bind(form.registration_date.unwrap_or_else(util::today))
        .bind(&form.account_status)
        .bind(&form.user_status)
        .bind(&form.email)
        .bind(hash)
        .bind(form.pin_code)
        .bind(&form.comment)
        .bind(form.company_id)
        .bind(form.role_id)
        .execute(conn)
        .await
        .map_err(username_taken)?;
        Ok(result.last_insert_rowid())
    }

    /// An empty password keeps the stored hash
    async fn update(conn: &mut SqliteConnection, id: i64, form: &EmployeeForm) -> RepoResult<()> {
        let hash = if form.password.is_empty() {
            None
        } else {
            Some(
                password::hash_password(&form.password)
                    .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?,
            )
        };

        sqlx::query(
            "UPDATE employee SET first_name = ?, last_name = ?, username = ?, phone_number = ?, birth_date = ?, registration_date = COALESCE(?, registration_date), account_status = ?, user_status = ?, email = ?, password = COALESCE(?, password), pin_code = ?, comment = ?, company_id = ?, role_id = ? WHERE id = ?",
        )
        .bind(&form.first_name)
        .bind(&form.last_name)
        .bind(&form.username)
        .bind(&form.phone_number)
        .bind(form.birth_date)
        .bind(form.registration_date)
        .bind(&form.account_status)
        .bind(&form.user_status)
        .bind(&form.email)
        .bind(hash)
        .bind(form.pin_code)
        .bind(&form.comment)
        .bind(form.company_id)
        .bind(form.role_id)
        .bind(id)
        .execute(conn)
        .await
        .map_err(username_taken)?;
        Ok(())
    }
}

/// `username` is the only unique column on `employee`
fn username_taken(err: sqlx::Error) -> RepoError {
    match RepoError::from(err) {
        RepoError::Duplicate(_) => RepoError::Conflict(ErrorCode::EmployeeUsernameExists),
        other => other,
    }
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<Employee>> {
    let row = sqlx::query_as::<_, Employee>("SELECT * FROM employee WHERE username = ? LIMIT 1")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{create, test_support::test_pool, update};

    fn form(username: &str) -> EmployeeForm {
        EmployeeForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            username: username.into(),
            phone_number: String::new(),
            birth_date: None,
            registration_date: None,
            account_status: "active".into(),
            user_status: String::new(),
            email: "ada@example.com".into(),
            password: "difference-engine".into(),
            pin_code: 1815,
            comment: String::new(),
            company_id: None,
            role_id: None,
        }
    }

    #[tokio::test]
    async fn test_password_is_hashed() {
        let pool = test_pool().await;
        let employee = create::<Employee>(&pool, &form("ada")).await.unwrap();
        assert_ne!(employee.password, "difference-engine");
        assert!(password::verify_password("difference-engine", &employee.password).unwrap());
        assert_eq!(employee.registration_date, util::today());
    }

    #[tokio::test]
    async fn test_empty_password_keeps_hash() {
        let pool = test_pool().await;
        let employee = create::<Employee>(&pool, &form("ada")).await.unwrap();
        let mut edit = form("ada");
        edit.password.clear();
        edit.comment = "promoted".into();
        let updated = update::<Employee>(&pool, employee.id, &edit).await.unwrap();
        assert_eq!(updated.password, employee.password);
        assert_eq!(updated.comment, "promoted");
    }

    #[tokio::test]
    async fn test_rename_onto_taken_username() {
        let pool = test_pool().await;
        create::<Employee>(&pool, &form("ada")).await.unwrap();
        let bob = create::<Employee>(&pool, &form("bob")).await.unwrap();
        let err = update::<Employee>(&pool, bob.id, &form("ada")).await.unwrap_err();
        assert!(matches!(
            err,
            RepoError::Conflict(ErrorCode::EmployeeUsernameExists)
        ));
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let pool = test_pool().await;
        create::<Employee>(&pool, &form("ada")).await.unwrap();
        let err = create::<Employee>(&pool, &form("ada")).await.unwrap_err();
        assert!(matches!(
            err,
            RepoError::Conflict(ErrorCode::EmployeeUsernameExists)
        ));
        assert!(find_by_username(&pool, "ada").await.unwrap().is_some());
        assert!(find_by_username(&pool, "bob").await.unwrap().is_none());
    }
}
