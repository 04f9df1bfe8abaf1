use crate::utils::date::{MINUTE_FORMAT, parse_datetime_at, truncate_to_minute};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Column order of the data file. Never reorder: existing files depend on it.
pub const HEADER: [&str; 4] = ["datetime", "hours", "project", "message"];

/// One logged entry of hours spent on a project at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRecord {
    #[serde(with = "minute_datetime")]
    pub datetime: NaiveDateTime, // ⇔ datetime (ISO-8601, minute precision)
    #[serde(deserialize_with = "trimmed_hours")]
    pub hours: f64, // ⇔ hours (no sign/range validation)
    pub project: Option<String>, // ⇔ project (empty field = None)
    pub message: Option<String>, // ⇔ message (empty field = None)
}

impl TimeRecord {
    pub fn new(
        datetime: NaiveDateTime,
        hours: f64,
        project: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            datetime: truncate_to_minute(datetime),
            hours,
            project: project.filter(|p| !p.is_empty()),
            message: message.filter(|m| !m.is_empty()),
        }
    }

    /// Calendar day the record is bucketed under in the daily chart.
    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    /// Grouping key; a missing project is its own (empty) bucket.
    pub fn project_key(&self) -> &str {
        self.project.as_deref().unwrap_or("")
    }
}

// Labels are read verbatim, so only the numeric column tolerates padding.
fn trimmed_hours<'de, D: serde::Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let raw = String::deserialize(d)?;
    raw.trim()
        .parse()
        .map_err(|_| serde::de::Error::custom(format!("invalid hours '{raw}'")))
}

mod minute_datetime {
    use super::*;
    use serde::{Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.format(MINUTE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        // `now` in the file is not a timestamp: reject it rather than resolving it
        if raw.trim().eq_ignore_ascii_case(crate::utils::date::NOW) {
            return Err(D::Error::custom(format!("invalid datetime '{raw}'")));
        }
        parse_datetime_at(&raw, NaiveDateTime::MIN).map_err(D::Error::custom)
    }
}
