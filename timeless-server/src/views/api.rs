//! Generic JSON CRUD handlers
//!
//! [`CrudApi`] mounts `GET/POST {base}` and `GET/PUT/DELETE {base}/{id}`
//! for any [`Entity`], answering with [`ApiResponse`] bodies.

use std::marker::PhantomData;

use axum::Router;
use axum::extract::{Path, State};
use axum::routing::get;
use serde_json::Value;
use shared::error::{ApiResponse, AppError, AppResult};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::{self, Entity};

pub struct CrudApi<E> {
    base: &'static str,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> CrudApi<E> {
    pub fn new(base: &'static str) -> Self {
        Self {
            base,
            _entity: PhantomData,
        }
    }

    pub fn router(self) -> Router<ServerState> {
        Router::new()
            .route(self.base, get(list::<E>).post(create::<E>))
            .route(
                &format!("{}/{{id}}", self.base),
                get(detail::<E>).put(update::<E>).delete(remove::<E>),
            )
    }
}

fn missing<E: Entity>(id: i64) -> AppError {
    AppError::new(E::NOT_FOUND).with_detail("id", id)
}

/// JSON body into a validated form
///
/// Takes the raw value so decode failures share the `AppError` body shape.
fn parse_form<E: Entity>(body: Value) -> AppResult<E::Form> {
    let form: E::Form =
        serde_json::from_value(body).map_err(|e| AppError::validation(e.to_string()))?;
    form.validate()?;
    Ok(form)
}

async fn list<E: Entity>(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<E>>> {
    let rows = repository::find_all::<E>(&state.pool).await?;
    Ok(ApiResponse::success(rows))
}

async fn detail<E: Entity>(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<E>> {
    repository::find_by_id::<E>(&state.pool, id)
        .await?
        .map(ApiResponse::success)
        .ok_or_else(|| missing::<E>(id))
}

async fn create<E: Entity>(
    State(state): State<ServerState>,
    axum::Json(body): axum::Json<Value>,
) -> AppResult<ApiResponse<E>> {
    let form = parse_form::<E>(body)?;
    let row = repository::create::<E>(&state.pool, &form).await?;
    tracing::info!(entity = E::TABLE, id = row.id(), "Row created");
    Ok(ApiResponse::success(row))
}

async fn update<E: Entity>(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    axum::Json(body): axum::Json<Value>,
) -> AppResult<ApiResponse<E>> {
    let form = parse_form::<E>(body)?;
    match repository::update::<E>(&state.pool, id, &form).await {
        Ok(row) => Ok(ApiResponse::success(row)),
        Err(repository::RepoError::NotFound(_)) => Err(missing::<E>(id)),
        Err(e) => Err(e.into()),
    }
}

async fn remove<E: Entity>(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    let mut tx = state.pool.begin().await.map_err(repository::RepoError::from)?;
    if !repository::delete::<E>(&mut *tx, id).await? {
        return Err(missing::<E>(id));
    }
    tx.commit().await.map_err(repository::RepoError::from)?;
    tracing::info!(entity = E::TABLE, id, "Row deleted");
    Ok(ApiResponse::ok())
}
