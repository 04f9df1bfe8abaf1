use crate::errors::AppResult;
use crate::models::TimeRecord;
use crate::utils::date::{format_readable, parse_datetime_at};
use chrono::{Local, NaiveDateTime};

/// Inclusive `[from, to]` window used to select records for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl DateRange {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Self {
        Self { from, to }
    }

    /// `from > to` selects nothing; the report still runs.
    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }

    /// Parse both bounds; `now` means the same instant for `from` and `to`.
    pub fn parse(from: &str, to: &str) -> AppResult<Self> {
        Self::parse_at(from, to, Local::now().naive_local())
    }

    pub fn parse_at(from: &str, to: &str, now: NaiveDateTime) -> AppResult<Self> {
        Ok(Self::new(
            parse_datetime_at(from, now)?,
            parse_datetime_at(to, now)?,
        ))
    }

    pub fn contains(&self, dt: &NaiveDateTime) -> bool {
        self.from <= *dt && *dt <= self.to
    }

    pub fn select<'a>(&self, records: &'a [TimeRecord]) -> Vec<&'a TimeRecord> {
        records
            .iter()
            .filter(|r| self.contains(&r.datetime))
            .collect()
    }

    pub fn title(&self) -> String {
        format!("{} to {}", format_readable(&self.from), format_readable(&self.to))
    }
}
