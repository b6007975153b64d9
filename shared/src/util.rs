use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Current local wall-clock time, truncated to whole seconds
///
/// Stored datetimes carry no sub-second part, so values produced here
/// compare equal after a storage round trip.
pub fn now_naive() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Today's local date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_naive_has_no_fraction() {
        assert_eq!(now_naive().nanosecond(), 0);
    }
}
