//! Flash messages
//!
//! A flash is rendered into the page of the current request. When a handler
//! redirects instead, the message rides along in a short-lived `flash`
//! cookie that the next rendered page consumes and clears.

use axum::http::header::{COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

const COOKIE_NAME: &str = "flash";
const CLEAR_COOKIE: &str = "flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    fn to_cookie(&self) -> Option<HeaderValue> {
        let value = serde_urlencoded::to_string(self).ok()?;
        HeaderValue::from_str(&format!(
            "{COOKIE_NAME}={value}; Path=/; HttpOnly; SameSite=Lax"
        ))
        .ok()
    }
}

/// `302 Found` to `location`
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}

/// `302 Found` carrying a flash for the next page
pub fn redirect_with_flash(location: &str, flash: Flash) -> Response {
    let mut response = found(location);
    if let Some(cookie) = flash.to_cookie() {
        response.headers_mut().insert(SET_COOKIE, cookie);
    }
    response
}

/// Flash messages carried over from a redirect, if any
pub fn take(headers: &HeaderMap) -> Vec<Flash> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(name, value)| *name == COOKIE_NAME && !value.is_empty())
        .filter_map(|(_, value)| serde_urlencoded::from_str::<Flash>(value).ok())
        .collect()
}

/// Expire the flash cookie once its messages have been shown
pub fn clear(response: &mut Response) {
    response
        .headers_mut()
        .append(SET_COOKIE, HeaderValue::from_static(CLEAR_COOKIE));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_round_trip() {
        let flash = Flash::error("Company 7 not found; sorry, really");
        let response = redirect_with_flash("/companies/", flash.clone());
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "/companies/");

        let set_cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        let pair = set_cookie.split(';').next().unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {pair}")).unwrap(),
        );
        assert_eq!(take(&headers), vec![flash]);
    }

    #[test]
    fn test_cleared_cookie_yields_nothing() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("flash="));
        assert!(take(&headers).is_empty());
    }
}
