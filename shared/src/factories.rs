//! Test data factories
//!
//! Each factory builds a randomized, valid form payload for its entity.
//! [`form_fields`] flattens any payload into urlencoded pairs so the same
//! data can drive the HTML form handlers.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use serde_json::Value;

use crate::models::*;
use crate::util;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Chiara", "Dmitri", "Elena", "Farid", "Greta", "Hiro", "Ines", "Jonas",
    "Katarzyna", "Liam", "Maximiliano", "Nadia", "Oskar",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Bianchi", "Castellanos", "Dubois", "Eriksson", "Fischer", "Gonzalez",
    "Horvath", "Ivanova", "Jankowski", "Kowalczyk", "Lindqvist", "Moreau", "Nakamura",
];

const WORDS: &[&str] = &[
    "amber", "basil", "cellar", "dune", "ember", "fennel", "garden", "harbor", "indigo",
    "juniper", "kiln", "lantern", "meadow", "nutmeg", "orchard", "pepper", "quartz", "river",
    "saffron", "terrace", "umber", "velvet", "willow", "yarrow", "zest",
];

fn rng() -> rand::rngs::ThreadRng {
    rand::thread_rng()
}

fn pick(list: &[&'static str]) -> &'static str {
    list.choose(&mut rng()).copied().unwrap_or("timeless")
}

/// A short random sentence
pub fn text() -> String {
    let count = rng().gen_range(3..8);
    let words: Vec<&str> = (0..count).map(|_| pick(WORDS)).collect();
    let mut sentence = words.join(" ");
    if let Some(first) = sentence.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    sentence.push('.');
    sentence
}

/// A single random word with a numeric suffix
pub fn code() -> String {
    format!("{}-{}", pick(WORDS), rng().gen_range(100..1000))
}

/// A random calendar date between 1970 and 2020
pub fn date() -> NaiveDate {
    let base = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
    base + Duration::days(rng().gen_range(0..18_262))
}

fn pyint() -> i32 {
    rng().gen_range(0..10_000)
}

/// Flatten a serializable payload into urlencoded form pairs
///
/// Nulls are skipped, arrays become repeated keys, everything else is
/// rendered as its string form.
pub fn form_fields<T: Serialize>(payload: &T) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Ok(Value::Object(map)) = serde_json::to_value(payload) {
        for (key, value) in map {
            push_value(&mut pairs, &key, value);
        }
    }
    pairs
}

fn push_value(pairs: &mut Vec<(String, String)>, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((key.to_string(), s)),
        Value::Array(values) => {
            for v in values {
                push_value(pairs, key, v);
            }
        }
        other => pairs.push((key.to_string(), other.to_string())),
    }
}

pub struct TableShapeFactory;

impl TableShapeFactory {
    pub fn build() -> TableShapeForm {
        TableShapeForm {
            description: text(),
            picture: text(),
        }
    }
}

pub struct EmployeeFactory;

impl EmployeeFactory {
    pub fn build() -> EmployeeForm {
        let first_name = pick(FIRST_NAMES).to_string();
        let last_name = pick(LAST_NAMES).to_string();
        let username: String = format!("{first_name}{last_name}")
            .chars()
            .take(USERNAME_MAX_LEN)
            .collect();
        EmployeeForm {
            email: format!(
                "{}.{}{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                rng().gen_range(1..1000)
            ),
            first_name,
            last_name,
            username,
            phone_number: format!("+1-555-{:04}", rng().gen_range(0..10_000)),
            birth_date: Some(date()),
            registration_date: Some(date()),
            account_status: text(),
            user_status: text(),
            password: text(),
            pin_code: rng().gen_range(1..=9999),
            comment: "Test comment".to_string(),
            company_id: None,
            role_id: None,
        }
    }
}

pub struct CompanyFactory;

impl CompanyFactory {
    pub fn build() -> CompanyForm {
        CompanyForm {
            name: text(),
            code: code(),
            address: text(),
        }
    }
}

pub struct ItemFactory;

impl ItemFactory {
    pub fn build() -> ItemForm {
        ItemForm {
            name: text(),
            stock_date: Some(date()),
            comment: text(),
            company_id: None,
        }
    }
}

pub struct RoleFactory;

impl RoleFactory {
    pub fn build() -> RoleForm {
        RoleForm {
            name: pick(WORDS).to_string(),
            works_on_shifts: true,
            company_id: None,
        }
    }
}

pub struct TableFactory;

impl TableFactory {
    pub fn build() -> DiningTableForm {
        DiningTableForm {
            name: text(),
            floor_id: None,
            shape_id: None,
            x: pyint(),
            y: pyint(),
            width: pyint(),
            height: pyint(),
            status: if rng().gen_bool(0.5) { TABLE_OCCUPIED } else { TABLE_FREE },
            max_capacity: pyint(),
            multiple: rng().gen_bool(0.5),
            playstation: rng().gen_bool(0.5),
        }
    }
}

pub struct FloorFactory;

impl FloorFactory {
    pub fn build() -> FloorForm {
        FloorForm {
            location_id: None,
            description: text(),
        }
    }
}

pub struct ReservationFactory;

impl ReservationFactory {
    /// Start is now (whole seconds); end is always three days later
    pub fn build() -> ReservationForm {
        let start_time = util::now_naive();
        ReservationForm {
            id: None,
            start_time,
            end_time: start_time + Duration::days(3),
            customer_id: None,
            num_of_persons: rng().gen_range(1..=20),
            comment: text(),
            status: ReservationStatus::Late,
            tables: Vec::new(),
        }
    }
}

pub struct ReservationSettingsFactory;

impl ReservationSettingsFactory {
    pub fn build() -> ReservationSettingsForm {
        let start_time = util::now_naive();
        ReservationSettingsForm {
            start_time,
            end_time: start_time + Duration::hours(1),
            customer_id: Some(1),
            num_of_persons: 1,
            comment: text(),
            status: ReservationStatus::Confirmed,
            multiple: true,
            table_id: None,
        }
    }
}

pub struct CommentFactory;

impl CommentFactory {
    pub fn build(reservation_id: i64) -> CommentForm {
        CommentForm {
            reservation_id,
            body: text(),
            date: Some(util::now_naive()),
        }
    }
}

pub struct SchemeTypeFactory;

impl SchemeTypeFactory {
    pub fn build() -> SchemeTypeForm {
        SchemeTypeForm {
            description: text(),
            default_value: text(),
            value_type: pick(WORDS).to_string(),
        }
    }
}

pub struct LocationFactory;

impl LocationFactory {
    const EXCLUDED_EDIT_FIELDS: &'static [&'static str] = &["id", "company_id"];

    pub fn build() -> LocationForm {
        LocationForm {
            name: text(),
            code: code(),
            company_id: None,
            country: text(),
            region: text(),
            city: text(),
            address: text(),
            longitude: format!("{:.6}", rng().gen_range(-180.0..180.0_f64)),
            latitude: format!("{:.6}", rng().gen_range(-90.0..90.0_f64)),
            kind: pick(WORDS).to_string(),
            status: pick(WORDS).to_string(),
            comment: text(),
        }
    }

    /// Form pairs for the edit view, without identity and ownership fields
    pub fn edit_fields() -> Vec<(String, String)> {
        form_fields(&Self::build())
            .into_iter()
            .filter(|(key, _)| !Self::EXCLUDED_EDIT_FIELDS.contains(&key.as_str()))
            .collect()
    }
}
