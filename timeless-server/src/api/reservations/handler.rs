//! Reservation Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Map;
use shared::models::{DiningTable, Reservation, ReservationForm, ReservationStatus, ReservationWithTables};

use crate::core::ServerState;
use crate::db::repository::{self, Entity, RepoError, reservation};
use crate::utils::{AppError, AppResult};
use crate::views::flash::{self, Flash};
use crate::views::form::{self, RawForm};
use crate::views::resource::{FieldView, Resource, field_views};
use crate::views::templates;

const LIST_URL: &str = "/reservations/";

#[derive(Serialize)]
struct ListRow {
    #[serde(flatten)]
    row: ReservationWithTables,
    status_name: &'static str,
}

#[derive(Serialize)]
struct ListPage {
    title: &'static str,
    reservations: Vec<ListRow>,
    flashes: Vec<Flash>,
}

#[derive(Serialize)]
struct FormPage {
    title: String,
    action: &'static str,
    id: Option<i64>,
    fields: Vec<FieldView>,
    flashes: Vec<Flash>,
}

pub async fn list(State(state): State<ServerState>, headers: HeaderMap) -> AppResult<Response> {
    let flashes = flash::take(&headers);
    let reservations = reservation::find_all_with_tables(&state.pool)
        .await?
        .into_iter()
        .map(|row| ListRow {
            status_name: row.reservation.status.name(),
            row,
        })
        .collect();
    let page = ListPage {
        title: "Reservations",
        reservations,
        flashes,
    };
    let mut response = state
        .templates
        .render(templates::RESERVATION_LIST, &page)?
        .into_response();
    if !page.flashes.is_empty() {
        flash::clear(&mut response);
    }
    Ok(response)
}

/// `(id, name)` choices for the table multi-select
async fn table_choices(state: &ServerState) -> AppResult<Vec<(i64, String)>> {
    let tables = repository::find_all::<DiningTable>(&state.pool).await?;
    Ok(tables.into_iter().map(|t| (t.id, t.name)).collect())
}

async fn render_form(
    state: &ServerState,
    id: Option<i64>,
    values: &RawForm,
    flashes: Vec<Flash>,
) -> AppResult<Response> {
    let tables = table_choices(state).await?;
    let (title, action) = match id {
        Some(id) => (format!("Edit reservation {id}"), "edit"),
        None => ("New reservation".to_string(), "create"),
    };
    let page = FormPage {
        title,
        action,
        id,
        fields: field_views(Reservation::FIELDS, values, &tables, false),
        flashes,
    };
    Ok(state
        .templates
        .render(templates::RESERVATION_FORM, &page)?
        .into_response())
}

pub async fn create_form(State(state): State<ServerState>) -> AppResult<Response> {
    render_form(&state, None, &Map::new(), Vec::new()).await
}

/// Insert one reservation and its table links
///
/// Any failure, from a missing field to a constraint violation, is shown
/// on the re-rendered form.
pub async fn create(State(state): State<ServerState>, body: Bytes) -> AppResult<Response> {
    let raw = form::parse(&body).unwrap_or_default();

    let saved: AppResult<i64> = async {
        let form: ReservationForm = form::decode(&raw)?;
        let mut tx = state.pool.begin().await.map_err(RepoError::from)?;
        let id = Reservation::insert(&mut *tx, &form).await?;
        tx.commit().await.map_err(RepoError::from)?;
        Ok(id)
    }
    .await;

    match saved {
        Ok(id) => {
            tracing::info!(reservation_id = id, "Reservation created");
            Ok(flash::found(LIST_URL))
        }
        Err(e) => {
            tracing::info!(error = %e, "Reservation rejected");
            render_form(&state, None, &raw, vec![Flash::error(form::describe(&e))]).await
        }
    }
}

/// Stored values with the linked tables preselected; empty when the row is gone
async fn edit_values(state: &ServerState, id: i64) -> AppResult<RawForm> {
    let mut conn = state.pool.acquire().await.map_err(RepoError::from)?;
    let Some(existing) = repository::find_by_id::<Reservation>(&mut *conn, id).await? else {
        return Ok(Map::new());
    };
    let mut form = existing.to_form();
    form.tables = reservation::table_ids(&mut *conn, id).await?;
    match serde_json::to_value(form) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(_) => Ok(Map::new()),
        Err(e) => Err(AppError::internal(e.to_string())),
    }
}

pub async fn edit_form(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Response> {
    let values = edit_values(&state, id).await?;
    render_form(&state, Some(id), &values, Vec::new()).await
}

/// Editing is not supported yet; the submission is acknowledged and ignored
pub async fn edit(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Response> {
    let values = edit_values(&state, id).await?;
    render_form(
        &state,
        Some(id),
        &values,
        vec![Flash::info("Edit not yet implemented")],
    )
    .await
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Response> {
    let mut tx = state.pool.begin().await.map_err(RepoError::from)?;
    if repository::find_by_id::<Reservation>(&mut *tx, id).await?.is_none() {
        return Err(AppError::with_message(
            Reservation::NOT_FOUND,
            format!("Reservation {id} not found"),
        ));
    }
    repository::delete::<Reservation>(&mut *tx, id).await?;
    tx.commit().await.map_err(RepoError::from)?;
    tracing::info!(reservation_id = id, "Reservation deleted");
    Ok(flash::found(LIST_URL))
}

#[derive(Serialize)]
pub struct ReservationList {
    items: Vec<Reservation>,
}

/// Fixed demonstration payload; `company_id` is accepted but not queried
pub async fn demo(Path(company_id): Path<i64>) -> Json<ReservationList> {
    tracing::debug!(company_id, "Serving demonstration reservation list");
    let epoch = NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();
    Json(ReservationList {
        items: vec![Reservation {
            id: 1,
            start_time: epoch,
            end_time: epoch,
            customer_id: Some(1),
            num_of_persons: 1,
            comment: "Test".to_string(),
            status: ReservationStatus::Confirmed,
        }],
    })
}
