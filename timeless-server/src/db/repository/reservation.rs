//! Reservation Repository
//!
//! A reservation owns its table links (`reservation_tables`) and its
//! comments; both go away with it through `ON DELETE CASCADE`.

use std::collections::HashMap;

use async_trait::async_trait;
use shared::error::ErrorCode;
use shared::models::{Reservation, ReservationForm, ReservationWithTables};
use sqlx::{SqliteConnection, SqlitePool};

use super::{Entity, RepoResult, find_all};

#[async_trait]
impl Entity for Reservation {
    const TABLE: &'static str = "reservation";
    const NOT_FOUND: ErrorCode = ErrorCode::ReservationNotFound;
    type Form = ReservationForm;

    fn id(&self) -> i64 {
        self.id
    }

    /// Honors an explicit `id` from the form; otherwise storage assigns one
    async fn insert(conn: &mut SqliteConnection, form: &ReservationForm) -> RepoResult<i64> {
        let result = sqlx::query(
            "INSERT INTO reservation (id, start_time, end_time, customer_id, num_of_persons, comment, status) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(form.id)
        .bind(form.start_time)
        .bind(form.end_time)
        .bind(form.customer_id)
        .bind(form.num_of_persons)
        .bind(&form.comment)
        .bind(form.status)
        .execute(&mut *conn)
        .await?;
        let id = result.last_insert_rowid();
        link_tables(conn, id, &form.tables).await?;
        Ok(id)
    }

    /// Replaces the table links with the form's list
    async fn update(conn: &mut SqliteConnection, id: i64, form: &ReservationForm) -> RepoResult<()> {
        sqlx::query(
            "UPDATE reservation SET start_time = ?, end_time = ?, customer_id = ?, num_of_persons = ?, comment = ?, status = ? WHERE id = ?",
        )
        .bind(form.start_time)
        .bind(form.end_time)
        .bind(form.customer_id)
        .bind(form.num_of_persons)
        .bind(&form.comment)
        .bind(form.status)
        .bind(id)
        .execute(&mut *conn)
        .await?;

        sqlx::query("DELETE FROM reservation_tables WHERE reservation_id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        link_tables(conn, id, &form.tables).await
    }
}

async fn link_tables(conn: &mut SqliteConnection, reservation_id: i64, tables: &[i64]) -> RepoResult<()> {
    for table_id in tables {
        sqlx::query("INSERT OR IGNORE INTO reservation_tables (reservation_id, table_id) VALUES (?, ?)")
            .bind(reservation_id)
            .bind(table_id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

/// Table ids linked to one reservation
pub async fn table_ids(conn: &mut SqliteConnection, reservation_id: i64) -> RepoResult<Vec<i64>> {
    let rows: Vec<(i64,)> = sqlx::query_as(
        "SELECT table_id FROM reservation_tables WHERE reservation_id = ? ORDER BY table_id",
    )
    .bind(reservation_id)
    .fetch_all(conn)
    .await?;
    Ok(rows.into_iter().map(|(id,)| id).collect())
}

/// Every reservation with its linked table ids, ordered by id
pub async fn find_all_with_tables(pool: &SqlitePool) -> RepoResult<Vec<ReservationWithTables>> {
    let reservations = find_all::<Reservation>(pool).await?;
    let links: Vec<(i64, i64)> = sqlx::query_as(
        "SELECT reservation_id, table_id FROM reservation_tables ORDER BY reservation_id, table_id",
    )
    .fetch_all(pool)
    .await?;

    let mut by_reservation: HashMap<i64, Vec<i64>> = HashMap::new();
    for (reservation_id, table_id) in links {
        by_reservation.entry(reservation_id).or_default().push(table_id);
    }

    Ok(reservations
        .into_iter()
        .map(|reservation| {
            let tables = by_reservation.remove(&reservation.id).unwrap_or_default();
            ReservationWithTables { reservation, tables }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{
        RepoError, comment, create, delete, find_by_id, test_support::test_pool,
    };
    use chrono::Duration;
    use shared::models::{Comment, CommentForm, DiningTable, DiningTableForm, ReservationStatus};
    use shared::util;

    fn form(tables: Vec<i64>) -> ReservationForm {
        let start = util::now_naive();
        ReservationForm {
            id: None,
            start_time: start,
            end_time: start + Duration::hours(2),
            customer_id: Some(3),
            num_of_persons: 4,
            comment: "birthday".into(),
            status: ReservationStatus::Confirmed,
            tables,
        }
    }

    async fn add_table(pool: &SqlitePool, name: &str) -> i64 {
        create::<DiningTable>(
            pool,
            &DiningTableForm {
                name: name.into(),
                floor_id: None,
                shape_id: None,
                x: 0,
                y: 0,
                width: 1,
                height: 1,
                status: 0,
                max_capacity: 4,
                multiple: false,
                playstation: false,
            },
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_insert_links_tables() {
        let pool = test_pool().await;
        let t1 = add_table(&pool, "T1").await;
        let t2 = add_table(&pool, "T2").await;

        let created = create::<Reservation>(&pool, &form(vec![t2, t1])).await.unwrap();
        assert_eq!(created.status, ReservationStatus::Confirmed);

        let all = find_all_with_tables(&pool).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].tables, vec![t1, t2]);
    }

    #[tokio::test]
    async fn test_delete_cascades_comments_and_links() {
        let pool = test_pool().await;
        let t1 = add_table(&pool, "T1").await;
        let reservation = create::<Reservation>(&pool, &form(vec![t1])).await.unwrap();
        create::<Comment>(
            &pool,
            &CommentForm {
                reservation_id: reservation.id,
                body: "allergic to nuts".into(),
                date: None,
            },
        )
        .await
        .unwrap();

        assert!(delete::<Reservation>(&pool, reservation.id).await.unwrap());
        assert!(find_by_id::<Reservation>(&pool, reservation.id).await.unwrap().is_none());
        assert!(comment::find_by_reservation(&pool, reservation.id).await.unwrap().is_empty());

        let mut conn = pool.acquire().await.unwrap();
        assert!(table_ids(&mut *conn, reservation.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_inverted_period_rejected_by_storage() {
        let pool = test_pool().await;
        let mut bad = form(vec![]);
        bad.end_time = bad.start_time;
        let err = create::<Reservation>(&pool, &bad).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn test_unknown_table_rejected() {
        let pool = test_pool().await;
        let err = create::<Reservation>(&pool, &form(vec![99])).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        assert!(find_all_with_tables(&pool).await.unwrap().is_empty());
    }
}
