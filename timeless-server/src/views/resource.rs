//! View descriptors
//!
//! [`Resource`] extends the storage [`Entity`] with what the HTML views need:
//! human labels, list columns and the editable form fields.

use serde::Serialize;
use serde_json::Value;
use shared::models::serde_helpers::parse_bool;
use shared::models::*;

use crate::db::repository::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Email,
    Password,
    Date,
    DateTime,
    Checkbox,
    /// Reservation status select
    Status,
    /// Multi-select of dining tables
    Tables,
}

#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind) -> FormField {
    FormField { name, label, kind }
}

pub trait Resource: Entity {
    /// Singular display name
    const LABEL: &'static str;
    /// Plural display name, used as list title
    const PLURAL: &'static str;
    /// List column headers, matching [`Resource::cells`]
    const COLUMNS: &'static [&'static str];
    /// Editable fields, keyed by their form names
    const FIELDS: &'static [FormField];

    fn cells(&self) -> Vec<String>;

    fn to_form(&self) -> Self::Form;
}

/// A selectable option
#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Template-ready input
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub value: String,
    pub step: Option<&'static str>,
    pub checked: bool,
    pub readonly: bool,
    pub multiple: bool,
    pub is_textarea: bool,
    pub is_checkbox: bool,
    pub is_select: bool,
    pub options: Vec<Choice>,
}

impl FieldView {
    /// Build the input for `field` from a serialized form or raw submission
    ///
    /// `tables` lists the `(id, name)` choices for [`FieldKind::Tables`].
    pub fn build(
        field: &FormField,
        values: &serde_json::Map<String, Value>,
        tables: &[(i64, String)],
        readonly: bool,
    ) -> Self {
        let raw = values.get(field.name).unwrap_or(&Value::Null);
        let mut view = FieldView {
            name: field.name,
            label: field.label,
            input_type: "text",
            value: text(raw),
            step: None,
            checked: false,
            readonly,
            multiple: false,
            is_textarea: false,
            is_checkbox: false,
            is_select: false,
            options: Vec::new(),
        };
        match field.kind {
            FieldKind::Text => {}
            FieldKind::TextArea => view.is_textarea = true,
            FieldKind::Number => view.input_type = "number",
            FieldKind::Email => view.input_type = "email",
            FieldKind::Password => {
                view.input_type = "password";
                view.value.clear();
            }
            FieldKind::Date => view.input_type = "date",
            FieldKind::DateTime => {
                view.input_type = "datetime-local";
                view.step = Some("1");
            }
            FieldKind::Checkbox => {
                view.is_checkbox = true;
                view.checked = truthy(raw);
            }
            FieldKind::Status => {
                view.is_select = true;
                let current = status_of(raw);
                view.options = ReservationStatus::ALL
                    .into_iter()
                    .map(|status| Choice {
                        value: status.code().to_string(),
                        label: status.name().to_string(),
                        selected: current == Some(status),
                    })
                    .collect();
            }
            FieldKind::Tables => {
                view.is_select = true;
                view.multiple = true;
                let chosen = id_list(raw);
                view.options = tables
                    .iter()
                    .map(|(id, name)| Choice {
                        value: id.to_string(),
                        label: format!("{id}: {name}"),
                        selected: chosen.contains(id),
                    })
                    .collect();
            }
        }
        view
    }
}

/// Build every field of a resource form
pub fn field_views(
    fields: &[FormField],
    values: &serde_json::Map<String, Value>,
    tables: &[(i64, String)],
    readonly: bool,
) -> Vec<FieldView> {
    fields
        .iter()
        .map(|field| FieldView::build(field, values, tables, readonly))
        .collect()
}

fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        Value::String(s) => parse_bool(s).unwrap_or(false),
        _ => false,
    }
}

fn status_of(value: &Value) -> Option<ReservationStatus> {
    match value {
        Value::Number(n) => n.as_i64().and_then(ReservationStatus::from_code),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn id_list(value: &Value) -> Vec<i64> {
    match value {
        Value::Array(items) => items.iter().flat_map(id_list).collect(),
        Value::Number(n) => n.as_i64().into_iter().collect(),
        Value::String(s) => s.trim().parse().ok().into_iter().collect(),
        _ => Vec::new(),
    }
}

fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

impl Resource for Company {
    const LABEL: &'static str = "Company";
    const PLURAL: &'static str = "Companies";
    const COLUMNS: &'static [&'static str] = &["Name", "Code", "Address"];
    const FIELDS: &'static [FormField] = &[
        field("name", "Name", FieldKind::Text),
        field("code", "Code", FieldKind::Text),
        field("address", "Address", FieldKind::Text),
    ];

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), self.code.clone(), self.address.clone()]
    }

    fn to_form(&self) -> CompanyForm {
        self.into()
    }
}

impl Resource for Role {
    const LABEL: &'static str = "Role";
    const PLURAL: &'static str = "Roles";
    const COLUMNS: &'static [&'static str] = &["Name", "Works on shifts", "Company"];
    const FIELDS: &'static [FormField] = &[
        field("name", "Name", FieldKind::Text),
        field("works_on_shifts", "Works on shifts", FieldKind::Checkbox),
        field("company_id", "Company id", FieldKind::Number),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            yes_no(self.works_on_shifts),
            opt(&self.company_id),
        ]
    }

    fn to_form(&self) -> RoleForm {
        self.into()
    }
}

impl Resource for Item {
    const LABEL: &'static str = "Item";
    const PLURAL: &'static str = "Items";
    const COLUMNS: &'static [&'static str] = &["Name", "Stock date", "Updated", "Company"];
    const FIELDS: &'static [FormField] = &[
        field("name", "Name", FieldKind::Text),
        field("stock_date", "Stock date", FieldKind::Date),
        field("comment", "Comment", FieldKind::TextArea),
        field("company_id", "Company id", FieldKind::Number),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            opt(&self.stock_date),
            self.updated_on.to_string(),
            opt(&self.company_id),
        ]
    }

    fn to_form(&self) -> ItemForm {
        self.into()
    }
}

impl Resource for SchemeType {
    const LABEL: &'static str = "Scheme type";
    const PLURAL: &'static str = "Scheme types";
    const COLUMNS: &'static [&'static str] = &["Description", "Default value", "Value type"];
    const FIELDS: &'static [FormField] = &[
        field("description", "Description", FieldKind::Text),
        field("default_value", "Default value", FieldKind::Text),
        field("value_type", "Value type", FieldKind::Text),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.description.clone(),
            self.default_value.clone(),
            self.value_type.clone(),
        ]
    }

    fn to_form(&self) -> SchemeTypeForm {
        self.into()
    }
}

impl Resource for TableShape {
    const LABEL: &'static str = "Table shape";
    const PLURAL: &'static str = "Table shapes";
    const COLUMNS: &'static [&'static str] = &["Description", "Picture"];
    const FIELDS: &'static [FormField] = &[
        field("description", "Description", FieldKind::Text),
        field("picture", "Picture", FieldKind::Text),
    ];

    fn cells(&self) -> Vec<String> {
        vec![self.description.clone(), self.picture.clone()]
    }

    fn to_form(&self) -> TableShapeForm {
        self.into()
    }
}

impl Resource for Floor {
    const LABEL: &'static str = "Floor";
    const PLURAL: &'static str = "Floors";
    const COLUMNS: &'static [&'static str] = &["Location", "Description"];
    const FIELDS: &'static [FormField] = &[
        field("location_id", "Location id", FieldKind::Number),
        field("description", "Description", FieldKind::Text),
    ];

    fn cells(&self) -> Vec<String> {
        vec![opt(&self.location_id), self.description.clone()]
    }

    fn to_form(&self) -> FloorForm {
        self.into()
    }
}

impl Resource for Location {
    const LABEL: &'static str = "Location";
    const PLURAL: &'static str = "Locations";
    const COLUMNS: &'static [&'static str] = &["Name", "Code", "City", "Type", "Status"];
    const FIELDS: &'static [FormField] = &[
        field("name", "Name", FieldKind::Text),
        field("code", "Code", FieldKind::Text),
        field("company_id", "Company id", FieldKind::Number),
        field("country", "Country", FieldKind::Text),
        field("region", "Region", FieldKind::Text),
        field("city", "City", FieldKind::Text),
        field("address", "Address", FieldKind::Text),
        field("longitude", "Longitude", FieldKind::Text),
        field("latitude", "Latitude", FieldKind::Text),
        field("type", "Type", FieldKind::Text),
        field("status", "Status", FieldKind::Text),
        field("comment", "Comment", FieldKind::TextArea),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.code.clone(),
            self.city.clone(),
            self.kind.clone(),
            self.status.clone(),
        ]
    }

    fn to_form(&self) -> LocationForm {
        self.into()
    }
}

impl Resource for DiningTable {
    const LABEL: &'static str = "Table";
    const PLURAL: &'static str = "Tables";
    const COLUMNS: &'static [&'static str] =
        &["Name", "Floor", "Capacity", "Status", "Multiple", "Playstation"];
    const FIELDS: &'static [FormField] = &[
        field("name", "Name", FieldKind::Text),
        field("floor_id", "Floor id", FieldKind::Number),
        field("shape_id", "Shape id", FieldKind::Number),
        field("x", "X", FieldKind::Number),
        field("y", "Y", FieldKind::Number),
        field("width", "Width", FieldKind::Number),
        field("height", "Height", FieldKind::Number),
        field("status", "Status (0 free, 1 occupied)", FieldKind::Number),
        field("max_capacity", "Max capacity", FieldKind::Number),
        field("multiple", "Multiple", FieldKind::Checkbox),
        field("playstation", "Playstation", FieldKind::Checkbox),
    ];

    fn cells(&self) -> Vec<String> {
        let status = if self.status == TABLE_OCCUPIED {
            "occupied"
        } else {
            "free"
        };
        vec![
            self.name.clone(),
            opt(&self.floor_id),
            self.max_capacity.to_string(),
            status.to_string(),
            yes_no(self.multiple),
            yes_no(self.playstation),
        ]
    }

    fn to_form(&self) -> DiningTableForm {
        self.into()
    }
}

impl Resource for Employee {
    const LABEL: &'static str = "Employee";
    const PLURAL: &'static str = "Employees";
    const COLUMNS: &'static [&'static str] =
        &["Username", "First name", "Last name", "Email", "Account status"];
    const FIELDS: &'static [FormField] = &[
        field("first_name", "First name", FieldKind::Text),
        field("last_name", "Last name", FieldKind::Text),
        field("username", "Username", FieldKind::Text),
        field("email", "Email", FieldKind::Email),
        field("password", "Password", FieldKind::Password),
        field("phone_number", "Phone number", FieldKind::Text),
        field("birth_date", "Birth date", FieldKind::Date),
        field("registration_date", "Registration date", FieldKind::Date),
        field("account_status", "Account status", FieldKind::Text),
        field("user_status", "User status", FieldKind::Text),
        field("pin_code", "PIN", FieldKind::Number),
        field("comment", "Comment", FieldKind::TextArea),
        field("company_id", "Company id", FieldKind::Number),
        field("role_id", "Role id", FieldKind::Number),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.username.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.account_status.clone(),
        ]
    }

    fn to_form(&self) -> EmployeeForm {
        self.into()
    }
}

impl Resource for ReservationSettings {
    const LABEL: &'static str = "Reservation setting";
    const PLURAL: &'static str = "Reservation settings";
    const COLUMNS: &'static [&'static str] =
        &["Start", "End", "Customer", "Persons", "Comment", "Status", "Multiple", "Table"];
    const FIELDS: &'static [FormField] = &[
        field("start_time", "Start", FieldKind::DateTime),
        field("end_time", "End", FieldKind::DateTime),
        field("customer_id", "Customer id", FieldKind::Number),
        field("num_of_persons", "Persons", FieldKind::Number),
        field("comment", "Comment", FieldKind::TextArea),
        field("status", "Status", FieldKind::Status),
        field("multiple", "Multiple", FieldKind::Checkbox),
        field("tables", "Table id", FieldKind::Number),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.start_time.to_string(),
            self.end_time.to_string(),
            opt(&self.customer_id),
            self.num_of_persons.to_string(),
            self.comment.clone(),
            self.status.to_string(),
            yes_no(self.multiple),
            opt(&self.table_id),
        ]
    }

    fn to_form(&self) -> ReservationSettingsForm {
        self.into()
    }
}

impl Resource for Reservation {
    const LABEL: &'static str = "Reservation";
    const PLURAL: &'static str = "Reservations";
    const COLUMNS: &'static [&'static str] =
        &["Start", "End", "Customer", "Persons", "Comment", "Status"];
    const FIELDS: &'static [FormField] = &[
        field("id", "Id (optional)", FieldKind::Number),
        field("start_time", "Start", FieldKind::DateTime),
        field("end_time", "End", FieldKind::DateTime),
        field("customer_id", "Customer id", FieldKind::Number),
        field("num_of_persons", "Persons", FieldKind::Number),
        field("comment", "Comment", FieldKind::TextArea),
        field("status", "Status", FieldKind::Status),
        field("tables", "Tables", FieldKind::Tables),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.start_time.to_string(),
            self.end_time.to_string(),
            opt(&self.customer_id),
            self.num_of_persons.to_string(),
            self.comment.clone(),
            self.status.to_string(),
        ]
    }

    fn to_form(&self) -> ReservationForm {
        self.into()
    }
}

impl Resource for Comment {
    const LABEL: &'static str = "Comment";
    const PLURAL: &'static str = "Comments";
    const COLUMNS: &'static [&'static str] = &["Reservation", "Body", "Date"];
    const FIELDS: &'static [FormField] = &[
        field("reservation_id", "Reservation id", FieldKind::Number),
        field("body", "Body", FieldKind::TextArea),
        field("date", "Date", FieldKind::DateTime),
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.reservation_id.to_string(),
            self.body.clone(),
            self.date.to_string(),
        ]
    }

    fn to_form(&self) -> CommentForm {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(v: Value) -> serde_json::Map<String, Value> {
        match v {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_columns_match_cells() {
        let company = Company {
            id: 1,
            name: "Acme".into(),
            code: "AC".into(),
            address: "Somewhere".into(),
        };
        assert_eq!(company.cells().len(), Company::COLUMNS.len());
    }

    #[test]
    fn test_status_select_marks_current() {
        let map = values(json!({ "status": "on" }));
        let view = FieldView::build(
            &field("status", "Status", FieldKind::Status),
            &map,
            &[],
            false,
        );
        let selected: Vec<_> = view.options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "confirmed");
    }

    #[test]
    fn test_tables_select_from_choices() {
        let map = values(json!({ "tables": ["2", "3"] }));
        let choices = vec![(1, "Window".to_string()), (2, "Bar".to_string())];
        let view = FieldView::build(
            &field("tables", "Tables", FieldKind::Tables),
            &map,
            &choices,
            false,
        );
        assert!(view.multiple);
        assert!(!view.options[0].selected);
        assert!(view.options[1].selected);
    }

    #[test]
    fn test_password_never_echoed() {
        let map = values(json!({ "password": "hunter2" }));
        let view = FieldView::build(
            &field("password", "Password", FieldKind::Password),
            &map,
            &[],
            false,
        );
        assert!(view.value.is_empty());
    }

    #[test]
    fn test_checkbox_from_form_string() {
        let map = values(json!({ "multiple": "True" }));
        let views = field_views(ReservationSettings::FIELDS, &map, &[], true);
        let multiple = views.iter().find(|v| v.name == "multiple").unwrap();
        assert!(multiple.checked);
        assert!(multiple.readonly);
    }
}
