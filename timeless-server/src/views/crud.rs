//! Generic HTML CRUD views
//!
//! [`CrudViews`] binds list, detail, create/edit and delete handlers for any
//! [`Resource`] under one URL prefix:
//!
//! | Route                       | Handler                          |
//! |-----------------------------|----------------------------------|
//! | `GET {base}/`, `GET {base}` | list                             |
//! | `POST {base}/`              | create (opt-in)                  |
//! | `GET/POST {base}/create`    | create form                      |
//! | `GET/POST {base}/edit/{id}` | edit form                        |
//! | `GET {base}/{id}`           | detail                           |
//! | `POST {base}/delete/{id}`   | delete                           |
//!
//! Mutations run in a scoped transaction that is committed on success and
//! dropped (rolled back) on every error path.

use std::marker::PhantomData;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde::Serialize;
use serde_json::{Map, Value};
use shared::error::AppError;

use super::flash::{self, Flash};
use super::form::{self, RawForm};
use super::resource::{FieldView, Resource, field_views};
use super::templates::{self, Templates};
use crate::core::ServerState;
use crate::db::repository;

/// Template names used by a [`CrudViews`] instance
#[derive(Debug, Clone, Copy)]
pub struct ViewTemplates {
    pub list: &'static str,
    pub detail: &'static str,
    pub form: &'static str,
}

impl Default for ViewTemplates {
    fn default() -> Self {
        Self {
            list: templates::LIST,
            detail: templates::DETAIL,
            form: templates::FORM,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Ctx {
    base: &'static str,
    templates: ViewTemplates,
    can_detail: bool,
    can_edit: bool,
    can_delete: bool,
}

impl Ctx {
    fn list_url(&self) -> String {
        format!("{}/", self.base)
    }
}

pub struct CrudViews<E> {
    ctx: Ctx,
    list: bool,
    create_on_list: bool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Resource> CrudViews<E> {
    /// A builder with no handlers enabled yet
    pub fn new(base: &'static str, templates: ViewTemplates) -> Self {
        Self {
            ctx: Ctx {
                base,
                templates,
                can_detail: false,
                can_edit: false,
                can_delete: false,
            },
            list: false,
            create_on_list: false,
            _entity: PhantomData,
        }
    }

    pub fn list(mut self) -> Self {
        self.list = true;
        self
    }

    pub fn detail(mut self) -> Self {
        self.ctx.can_detail = true;
        self
    }

    /// Create and edit forms
    pub fn create_update(mut self) -> Self {
        self.ctx.can_edit = true;
        self
    }

    pub fn delete(mut self) -> Self {
        self.ctx.can_delete = true;
        self
    }

    /// Also accept create submissions posted to the list URL
    pub fn create_on_list(mut self) -> Self {
        self.create_on_list = true;
        self
    }

    pub fn all(self) -> Self {
        self.list().detail().create_update().delete()
    }

    pub fn router(self) -> Router<ServerState> {
        let ctx = self.ctx;
        let base = ctx.base;
        let mut router = Router::new();

        if self.list {
            let list = get(move |State(state): State<ServerState>, headers: HeaderMap| async move {
                list_view::<E>(&state, ctx, &headers).await
            });
            let list = if self.create_on_list {
                list.post(move |State(state): State<ServerState>, body: Bytes| async move {
                    submit_view::<E>(&state, ctx, None, &body).await
                })
            } else {
                list
            };
            router = router
                .route(&format!("{base}/"), list.clone())
                .route(base, list);
        }

        if ctx.can_edit {
            router = router
                .route(
                    &format!("{base}/create"),
                    get(move |State(state): State<ServerState>| async move {
                        form_view::<E>(&state, ctx, None).await
                    })
                    .post(move |State(state): State<ServerState>, body: Bytes| async move {
                        submit_view::<E>(&state, ctx, None, &body).await
                    }),
                )
                .route(
                    &format!("{base}/edit/{{id}}"),
                    get(
                        move |State(state): State<ServerState>, Path(id): Path<i64>| async move {
                            form_view::<E>(&state, ctx, Some(id)).await
                        },
                    )
                    .post(
                        move |State(state): State<ServerState>,
                              Path(id): Path<i64>,
                              body: Bytes| async move {
                            submit_view::<E>(&state, ctx, Some(id), &body).await
                        },
                    ),
                );
        }

        if ctx.can_delete {
            router = router.route(
                &format!("{base}/delete/{{id}}"),
                post(
                    move |State(state): State<ServerState>, Path(id): Path<i64>| async move {
                        delete_view::<E>(&state, ctx, id).await
                    },
                ),
            );
        }

        if ctx.can_detail {
            router = router.route(
                &format!("{base}/{{id}}"),
                get(
                    move |State(state): State<ServerState>, Path(id): Path<i64>| async move {
                        detail_view::<E>(&state, ctx, id).await
                    },
                ),
            );
        }

        router
    }
}

#[derive(Serialize)]
struct Row {
    id: i64,
    cells: Vec<String>,
}

#[derive(Serialize)]
struct ListPage<'a> {
    title: &'static str,
    label: &'static str,
    base: &'static str,
    columns: &'static [&'static str],
    rows: Vec<Row>,
    flashes: &'a [Flash],
    can_create: bool,
    can_detail: bool,
    can_edit: bool,
    can_delete: bool,
}

#[derive(Serialize)]
struct DetailPage {
    title: String,
    base: &'static str,
    id: i64,
    fields: Vec<FieldView>,
    flashes: Vec<Flash>,
    can_edit: bool,
}

#[derive(Serialize)]
struct FormPage {
    title: String,
    base: &'static str,
    action: &'static str,
    id: Option<i64>,
    submit_url: String,
    fields: Vec<FieldView>,
    flashes: Vec<Flash>,
}

fn not_found<E: Resource>(id: i64) -> String {
    format!("{} {id} not found", E::LABEL)
}

fn values_of<T: Serialize>(form: &T) -> RawForm {
    match serde_json::to_value(form) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

async fn list_view<E: Resource>(state: &ServerState, ctx: Ctx, headers: &HeaderMap) -> Response {
    let flashes = flash::take(headers);
    let rows = match repository::find_all::<E>(&state.pool).await {
        Ok(rows) => rows,
        Err(e) => return AppError::from(e).into_response(),
    };
    let page = ListPage {
        title: E::PLURAL,
        label: E::LABEL,
        base: ctx.base,
        columns: E::COLUMNS,
        rows: rows
            .iter()
            .map(|row| Row {
                id: row.id(),
                cells: row.cells(),
            })
            .collect(),
        flashes: &flashes,
        can_create: ctx.can_edit,
        can_detail: ctx.can_detail,
        can_edit: ctx.can_edit,
        can_delete: ctx.can_delete,
    };
    let mut response = state
        .templates
        .render(ctx.templates.list, &page)
        .into_response();
    if !flashes.is_empty() {
        flash::clear(&mut response);
    }
    response
}

async fn detail_view<E: Resource>(state: &ServerState, ctx: Ctx, id: i64) -> Response {
    let row = match repository::find_by_id::<E>(&state.pool, id).await {
        Ok(Some(row)) => row,
        Ok(None) => {
            return flash::redirect_with_flash(&ctx.list_url(), Flash::error(not_found::<E>(id)));
        }
        Err(e) => return AppError::from(e).into_response(),
    };
    let values = values_of(&row.to_form());
    let page = DetailPage {
        title: format!("{} {id}", E::LABEL),
        base: ctx.base,
        id,
        fields: field_views(E::FIELDS, &values, &[], true),
        flashes: Vec::new(),
        can_edit: ctx.can_edit,
    };
    state
        .templates
        .render(ctx.templates.detail, &page)
        .into_response()
}

fn render_form<E: Resource>(
    templates: &Templates,
    ctx: Ctx,
    id: Option<i64>,
    values: &RawForm,
    flashes: Vec<Flash>,
) -> Response {
    let (action, title, submit_url) = match id {
        Some(id) => (
            "edit",
            format!("Edit {} {id}", E::LABEL),
            format!("{}/edit/{id}", ctx.base),
        ),
        None => (
            "create",
            format!("New {}", E::LABEL),
            format!("{}/create", ctx.base),
        ),
    };
    let page = FormPage {
        title,
        base: ctx.base,
        action,
        id,
        submit_url,
        fields: field_views(E::FIELDS, values, &[], false),
        flashes,
    };
    templates.render(ctx.templates.form, &page).into_response()
}

async fn form_view<E: Resource>(state: &ServerState, ctx: Ctx, id: Option<i64>) -> Response {
    let values = match id {
        None => Map::new(),
        Some(id) => match repository::find_by_id::<E>(&state.pool, id).await {
            Ok(Some(row)) => values_of(&row.to_form()),
            Ok(None) => {
                return flash::redirect_with_flash(
                    &ctx.list_url(),
                    Flash::error(not_found::<E>(id)),
                );
            }
            Err(e) => return AppError::from(e).into_response(),
        },
    };
    render_form::<E>(&state.templates, ctx, id, &values, Vec::new())
}

enum Saved {
    Done,
    Missing,
}

async fn save<E: Resource>(
    state: &ServerState,
    id: Option<i64>,
    form: &E::Form,
) -> Result<Saved, AppError> {
    let mut tx = state.pool.begin().await.map_err(repository::RepoError::from)?;
    match id {
        None => {
            E::insert(&mut *tx, form).await?;
        }
        Some(id) => {
            if repository::find_by_id::<E>(&mut *tx, id).await?.is_none() {
                return Ok(Saved::Missing);
            }
            E::update(&mut *tx, id, form).await?;
        }
    }
    tx.commit().await.map_err(repository::RepoError::from)?;
    Ok(Saved::Done)
}

async fn submit_view<E: Resource>(
    state: &ServerState,
    ctx: Ctx,
    id: Option<i64>,
    body: &[u8],
) -> Response {
    let raw = match form::parse(body) {
        Ok(raw) => raw,
        Err(e) => return e.into_response(),
    };
    let rejected = |err: AppError| {
        tracing::info!(entity = E::TABLE, error = %err, "Form rejected");
        render_form::<E>(
            &state.templates,
            ctx,
            id,
            &raw,
            vec![Flash::error(form::describe(&err))],
        )
    };

    let form: E::Form = match form::decode(&raw) {
        Ok(form) => form,
        Err(e) => return rejected(e),
    };
    match save::<E>(state, id, &form).await {
        Ok(Saved::Done) => flash::found(&ctx.list_url()),
        Ok(Saved::Missing) => flash::redirect_with_flash(
            &ctx.list_url(),
            Flash::error(not_found::<E>(id.unwrap_or_default())),
        ),
        Err(e) => rejected(e),
    }
}

async fn delete_view<E: Resource>(state: &ServerState, ctx: Ctx, id: i64) -> Response {
    match delete_row::<E>(state, id).await {
        Ok(()) => flash::found(&ctx.list_url()),
        Err(e) => e.into_response(),
    }
}

async fn delete_row<E: Resource>(state: &ServerState, id: i64) -> Result<(), AppError> {
    let mut tx = state.pool.begin().await.map_err(repository::RepoError::from)?;
    if repository::find_by_id::<E>(&mut *tx, id).await?.is_none() {
        return Err(AppError::with_message(E::NOT_FOUND, not_found::<E>(id)));
    }
    repository::delete::<E>(&mut *tx, id).await?;
    tx.commit().await.map_err(repository::RepoError::from)?;
    tracing::info!(entity = E::TABLE, id, "Row deleted");
    Ok(())
}
