//! Reservation Routes
//!
//! | Path                           | Method   | Notes                    |
//! |--------------------------------|----------|--------------------------|
//! | /reservations/                 | GET      | list with table links    |
//! | /reservations/create           | GET/POST | form / create            |
//! | /reservations/edit/{id}        | GET/POST | placeholder, no mutation |
//! | /reservations/delete/{id}      | POST     | delete, 404 when missing |
//! | /reservations/settings/...     | *        | generic CRUD             |
//! | /api/reservations/{company_id} | GET      | demonstration payload    |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};
use shared::models::ReservationSettings;

use crate::core::ServerState;
use crate::views::{CrudViews, ViewTemplates};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/reservations/", get(handler::list))
        .route("/reservations", get(handler::list))
        .route(
            "/reservations/create",
            get(handler::create_form).post(handler::create),
        )
        .route(
            "/reservations/edit/{id}",
            get(handler::edit_form).post(handler::edit),
        )
        .route("/reservations/delete/{id}", post(handler::delete))
        .route("/api/reservations/{company_id}", get(handler::demo))
        .merge(
            CrudViews::<ReservationSettings>::new("/reservations/settings", ViewTemplates::default())
                .all()
                .create_on_list()
                .router(),
        )
}
