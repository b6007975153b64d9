//! Urlencoded form decoding
//!
//! Bodies are first split into raw pairs, then folded into a JSON object
//! (repeated keys become arrays) so the same `serde` forms serve both the
//! HTML views and the JSON API. The raw object is kept for re-rendering a
//! rejected submission.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use shared::error::{AppError, AppResult};
use validator::Validate;

/// Raw submitted fields
pub type RawForm = Map<String, Value>;

/// Split an `application/x-www-form-urlencoded` body into a [`RawForm`]
pub fn parse(body: &[u8]) -> AppResult<RawForm> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
        .map_err(|e| AppError::invalid(format!("Malformed form body: {e}")))?;
    Ok(fold(pairs))
}

fn fold(pairs: Vec<(String, String)>) -> RawForm {
    let mut map = Map::new();
    for (key, value) in pairs {
        match map.get_mut(&key) {
            Some(Value::Array(values)) => values.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
            None => {
                map.insert(key, Value::String(value));
            }
        }
    }
    map
}

/// Deserialize and validate a form
pub fn decode<F: DeserializeOwned + Validate>(raw: &RawForm) -> AppResult<F> {
    let form: F = serde_json::from_value(Value::Object(raw.clone()))
        .map_err(|e| AppError::validation(e.to_string()))?;
    form.validate()?;
    Ok(form)
}

/// One-line description of an error for a flash message
pub fn describe(err: &AppError) -> String {
    let Some(details) = &err.details else {
        return err.message.clone();
    };
    let mut fields: Vec<_> = details.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));
    let parts: Vec<String> = fields
        .into_iter()
        .map(|(field, value)| {
            let text = match value {
                Value::Array(messages) => messages
                    .iter()
                    .map(|m| m.as_str().map(str::to_string).unwrap_or_else(|| m.to_string()))
                    .collect::<Vec<_>>()
                    .join(", "),
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            if field == "__all__" {
                text
            } else {
                format!("{field}: {text}")
            }
        })
        .collect();
    format!("{}: {}", err.message, parts.join("; "))
}
