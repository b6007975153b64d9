//! Reservation Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use super::serde_helpers;
use crate::error::PERIOD_RULE;

/// Reservation lifecycle state
///
/// Stored and serialized as its numeric code. Parsing accepts the code, the
/// snake_case name, or `"on"` (checkbox value for the active state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[repr(i32)]
pub enum ReservationStatus {
    #[default]
    Unconfirmed = 1,
    Confirmed = 2,
    Late = 3,
    Cancelled = 4,
    Finished = 5,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 5] = [
        Self::Unconfirmed,
        Self::Confirmed,
        Self::Late,
        Self::Cancelled,
        Self::Finished,
    ];

    pub const fn code(self) -> i32 {
        self as i32
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Unconfirmed => "unconfirmed",
            Self::Confirmed => "confirmed",
            Self::Late => "late",
            Self::Cancelled => "cancelled",
            Self::Finished => "finished",
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| i64::from(s.code()) == code)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for status values outside the enumerated set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid reservation status: {0}")]
pub struct InvalidStatus(pub String);

impl FromStr for ReservationStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.eq_ignore_ascii_case("on") {
            return Ok(Self::Confirmed);
        }
        if let Ok(code) = raw.parse::<i64>() {
            return Self::from_code(code).ok_or_else(|| InvalidStatus(raw.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(raw))
            .ok_or_else(|| InvalidStatus(raw.to_string()))
    }
}

impl Serialize for ReservationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for ReservationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Code(code) => Self::from_code(code)
                .ok_or_else(|| serde::de::Error::custom(InvalidStatus(code.to_string()))),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub customer_id: Option<i64>,
    pub num_of_persons: i32,
    pub comment: String,
    pub status: ReservationStatus,
}

/// Reservation together with the ids of the tables it occupies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationWithTables {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub tables: Vec<i64>,
}

/// Create/edit payload for a reservation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_reservation_period", skip_on_field_errors = false))]
pub struct ReservationForm {
    #[serde(default, deserialize_with = "serde_helpers::opt_int")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::datetime")]
    pub start_time: NaiveDateTime,
    #[serde(deserialize_with = "serde_helpers::datetime")]
    pub end_time: NaiveDateTime,
    #[serde(default, deserialize_with = "serde_helpers::opt_int")]
    pub customer_id: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::int32")]
    #[validate(range(min = 1, message = "Number of persons must be positive"))]
    pub num_of_persons: i32,
    #[serde(default)]
    #[validate(length(max = 500, message = "Comment is too long"))]
    pub comment: String,
    pub status: ReservationStatus,
    #[serde(default, deserialize_with = "serde_helpers::int_list")]
    pub tables: Vec<i64>,
}

fn validate_reservation_period(form: &ReservationForm) -> Result<(), ValidationError> {
    check_period(form.start_time, form.end_time)
}

/// Shared `end_time > start_time` rule for reservations and their settings
pub fn check_period(start: NaiveDateTime, end: NaiveDateTime) -> Result<(), ValidationError> {
    if end <= start {
        let mut err = ValidationError::new(PERIOD_RULE);
        err.message = Some("End time must be after start time".into());
        return Err(err);
    }
    Ok(())
}

/// `tables` stays empty: links are stored apart and loaded by the caller
impl From<&Reservation> for ReservationForm {
    fn from(r: &Reservation) -> Self {
        Self {
            id: Some(r.id),
            start_time: r.start_time,
            end_time: r.end_time,
            customer_id: r.customer_id,
            num_of_persons: r.num_of_persons,
            comment: r.comment.clone(),
            status: r.status,
            tables: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn form(start: NaiveDateTime, end: NaiveDateTime) -> ReservationForm {
        ReservationForm {
            id: None,
            start_time: start,
            end_time: end,
            customer_id: Some(1),
            num_of_persons: 2,
            comment: "window seat".into(),
            status: ReservationStatus::Confirmed,
            tables: vec![],
        }
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("on".parse(), Ok(ReservationStatus::Confirmed));
        assert_eq!("2".parse(), Ok(ReservationStatus::Confirmed));
        assert_eq!("Late".parse(), Ok(ReservationStatus::Late));
        assert_eq!("5".parse(), Ok(ReservationStatus::Finished));
        assert!("9".parse::<ReservationStatus>().is_err());
        assert!("open".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_as_code() {
        let json = serde_json::to_string(&ReservationStatus::Cancelled).unwrap();
        assert_eq!(json, "4");
        let status: ReservationStatus = serde_json::from_str("\"on\"").unwrap();
        assert_eq!(status, ReservationStatus::Confirmed);
        let status: ReservationStatus = serde_json::from_str("3").unwrap();
        assert_eq!(status, ReservationStatus::Late);
    }

    #[test]
    fn test_period_must_be_positive() {
        let start = crate::util::now_naive();
        assert!(form(start, start + Duration::hours(1)).validate().is_ok());
        assert!(form(start, start).validate().is_err());
        assert!(form(start, start - Duration::minutes(5)).validate().is_err());
    }

    #[test]
    fn test_persons_must_be_positive() {
        let start = crate::util::now_naive();
        let mut f = form(start, start + Duration::hours(2));
        f.num_of_persons = 0;
        let errors = f.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("num_of_persons"));
    }
}
