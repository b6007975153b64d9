//! Handlebars template registry
//!
//! Templates are compiled into the binary and registered once at startup.

use std::sync::Arc;

use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;
use shared::error::{AppError, ErrorCode};

pub const LIST: &str = "crud/list";
pub const DETAIL: &str = "crud/detail";
pub const FORM: &str = "crud/form";
pub const RESERVATION_LIST: &str = "reservations/list";
pub const RESERVATION_FORM: &str = "reservations/create_edit";

const PARTIALS: &[(&str, &str)] = &[
    ("header", include_str!("../../templates/partials/header.hbs")),
    ("footer", include_str!("../../templates/partials/footer.hbs")),
    ("field", include_str!("../../templates/partials/field.hbs")),
];

const TEMPLATES: &[(&str, &str)] = &[
    (LIST, include_str!("../../templates/crud/list.hbs")),
    (DETAIL, include_str!("../../templates/crud/detail.hbs")),
    (FORM, include_str!("../../templates/crud/form.hbs")),
    (RESERVATION_LIST, include_str!("../../templates/reservations/list.hbs")),
    (RESERVATION_FORM, include_str!("../../templates/reservations/create_edit.hbs")),
];

#[derive(Clone)]
pub struct Templates {
    registry: Arc<Handlebars<'static>>,
}

impl Templates {
    pub fn new() -> Result<Self, AppError> {
        let mut registry = Handlebars::new();
        for (name, source) in PARTIALS {
            registry
                .register_partial(name, *source)
                .map_err(|e| template_error(name, e))?;
        }
        for (name, source) in TEMPLATES {
            registry
                .register_template_string(name, *source)
                .map_err(|e| template_error(name, e))?;
        }
        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    /// Render a registered template into an HTML response body
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<Html<String>, AppError> {
        self.registry
            .render(name, data)
            .map(Html)
            .map_err(|e| template_error(name, e))
    }
}

fn template_error(name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::with_message(ErrorCode::TemplateError, format!("Template {name}: {err}"))
}
