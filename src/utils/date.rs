//! Datetime utilities: the `now` token, ISO-8601 parsing and minute precision.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Timelike};

/// Literal accepted wherever a datetime is expected.
pub const NOW: &str = "now";

/// Canonical on-disk form: ISO-8601 at minute precision.
pub const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse `now` or an ISO-8601 string, truncated to the minute.
pub fn parse_datetime(input: &str) -> AppResult<NaiveDateTime> {
    parse_datetime_at(input, Local::now().naive_local())
}

/// Same as [`parse_datetime`], with `now` resolved to the given instant.
pub fn parse_datetime_at(input: &str, now: NaiveDateTime) -> AppResult<NaiveDateTime> {
    let s = input.trim();

    if s.eq_ignore_ascii_case(NOW) {
        return Ok(truncate_to_minute(now));
    }

    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(truncate_to_minute(dt));
        }
    }

    // with an explicit offset: convert to local wall time
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(truncate_to_minute(dt.with_timezone(&Local).naive_local()));
    }

    // date only → midnight
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        && let Some(dt) = d.and_hms_opt(0, 0, 0)
    {
        return Ok(dt);
    }

    Err(AppError::InvalidDate(input.to_string()))
}

pub fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(dt)
}

pub fn format_minutes(dt: &NaiveDateTime) -> String {
    dt.format(MINUTE_FORMAT).to_string()
}

/// Human form used in chart titles and messages.
pub fn format_readable(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn now_resolves_to_given_instant_at_minute_precision() {
        let now = dt("2024-01-10 09:41:27");
        assert_eq!(parse_datetime_at("now", now).unwrap(), dt("2024-01-10 09:41:00"));
        assert_eq!(parse_datetime_at("NOW", now).unwrap(), dt("2024-01-10 09:41:00"));
    }

    #[test]
    fn accepts_iso_variants() {
        let now = dt("2000-01-01 00:00:00");
        let expected = dt("2024-01-10 09:00:00");

        for input in [
            "2024-01-10T09:00",
            "2024-01-10T09:00:00",
            "2024-01-10T09:00:59.999",
            "2024-01-10 09:00",
            "2024-01-10 09:00:30",
        ] {
            assert_eq!(parse_datetime_at(input, now).unwrap(), expected, "{input}");
        }

        assert_eq!(
            parse_datetime_at("2024-01-10", now).unwrap(),
            dt("2024-01-10 00:00:00")
        );
    }

    #[test]
    fn rejects_malformed_input() {
        let now = dt("2000-01-01 00:00:00");
        for input in ["", "yesterday", "2024-13-01", "2024-01-10T25:00", "10/01/2024"] {
            let err = parse_datetime_at(input, now).unwrap_err();
            assert!(matches!(err, AppError::InvalidDate(_)), "{input}");
        }
    }

    #[test]
    fn serialized_form_reparses_to_truncated_value() {
        let original = dt("2024-03-05 17:08:44");
        let text = format_minutes(&original);
        assert_eq!(text, "2024-03-05T17:08");
        assert_eq!(
            parse_datetime_at(&text, original).unwrap(),
            truncate_to_minute(original)
        );
    }
}
