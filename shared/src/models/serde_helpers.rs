//! Serde helpers for form-encoded payloads
//!
//! HTML forms deliver every value as a string, while the JSON API delivers
//! native numbers and booleans. The helpers here accept both shapes so one
//! form type can serve both surfaces.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, de::Error as _};

/// Accepted datetime layouts, most specific first
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrString {
    Bool(bool),
    Int(i64),
    Str(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<IntOrString>),
    One(IntOrString),
}

/// Parse a datetime in any of the layouts browsers and clients send
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Parse an HTML checkbox / boolean-ish value
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "y" | "yes" => Some(true),
        "false" | "off" | "0" | "n" | "no" | "" => Some(false),
        _ => None,
    }
}

fn int_from<E: serde::de::Error>(value: IntOrString) -> Result<Option<i64>, E> {
    match value {
        IntOrString::Int(v) => Ok(Some(v)),
        IntOrString::Str(s) if s.trim().is_empty() => Ok(None),
        IntOrString::Str(s) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| E::custom(format!("not a valid integer: {s}"))),
    }
}

/// Required `i64` given as number or string
pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    int_from(IntOrString::deserialize(deserializer)?)?
        .ok_or_else(|| D::Error::custom("this field is required"))
}

/// Required `i32` given as number or string
pub fn int32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = int(deserializer)?;
    i32::try_from(value).map_err(|_| D::Error::custom(format!("integer out of range: {value}")))
}

/// Optional `i64`; an empty string counts as absent
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        Some(value) => int_from(value),
        None => Ok(None),
    }
}

/// One or many integer ids (`tables=1&tables=2`, `tables=1` or `[1, 2]`)
pub fn int_list<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::Many(values)) => values,
        Some(OneOrMany::One(value)) => vec![value],
        None => Vec::new(),
    };
    let mut ids = Vec::with_capacity(values.len());
    for value in values {
        if let Some(id) = int_from(value)? {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Boolean given as JSON bool, 0/1, or checkbox string
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(false),
        Some(BoolOrString::Bool(b)) => Ok(b),
        Some(BoolOrString::Int(i)) => Ok(i != 0),
        Some(BoolOrString::Str(s)) => {
            parse_bool(&s).ok_or_else(|| D::Error::custom(format!("not a valid boolean: {s}")))
        }
    }
}

/// Required datetime
pub fn datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).ok_or_else(|| D::Error::custom(format!("not a valid datetime: {raw}")))
}

/// Optional datetime; an empty string counts as absent
pub fn opt_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_datetime(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("not a valid datetime: {raw}"))),
        None => Ok(None),
    }
}

/// Optional date; an empty string counts as absent
pub fn opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_date(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("not a valid date: {raw}"))),
        None => Ok(None),
    }
}
