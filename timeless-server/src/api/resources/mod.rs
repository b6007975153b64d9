//! Generic HTML CRUD for the supporting entities

use axum::Router;
use shared::models::{
    Company, DiningTable, Employee, Floor, Item, Location, Role, SchemeType, TableShape,
};

use crate::core::ServerState;
use crate::views::{CrudViews, Resource, ViewTemplates};

fn crud<E: Resource>(base: &'static str) -> Router<ServerState> {
    CrudViews::<E>::new(base, ViewTemplates::default())
        .all()
        .router()
}

pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(crud::<Company>("/companies"))
        .merge(crud::<Employee>("/employees"))
        .merge(crud::<Item>("/items"))
        .merge(crud::<Role>("/roles"))
        .merge(crud::<DiningTable>("/tables"))
        .merge(crud::<TableShape>("/table-shapes"))
        .merge(crud::<Floor>("/floors"))
        .merge(crud::<Location>("/locations"))
        .merge(crud::<SchemeType>("/schemetypes"))
}
