//! Hours per project and per (day, project), the data behind both charts.

use crate::models::TimeRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Display label for records tracked without a project.
pub const NO_PROJECT_LABEL: &str = "(no project)";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Project keys in sorted order; the position is also the colour index.
    pub projects: Vec<String>,
    /// Total hours per project, aligned with `projects`.
    pub totals: Vec<f64>,
    /// One entry per calendar day, hours aligned with `projects`.
    pub days: Vec<(NaiveDate, Vec<f64>)>,
}

/// One stacked bar segment: `day` indexes `Summary::days`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub day: usize,
    pub bottom: f64,
    pub top: f64,
}

impl Summary {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a TimeRecord>,
    {
        let mut per_project: BTreeMap<String, f64> = BTreeMap::new();
        let mut per_day: BTreeMap<NaiveDate, BTreeMap<String, f64>> = BTreeMap::new();

        for r in records {
            let key = r.project_key().to_string();
            *per_project.entry(key.clone()).or_insert(0.0) += r.hours;
            *per_day
                .entry(r.date())
                .or_default()
                .entry(key)
                .or_insert(0.0) += r.hours;
        }

        let projects: Vec<String> = per_project.keys().cloned().collect();
        let totals: Vec<f64> = per_project.values().copied().collect();

        let days = per_day
            .into_iter()
            .map(|(date, hours)| {
                let aligned = projects
                    .iter()
                    .map(|p| hours.get(p).copied().unwrap_or(0.0))
                    .collect();
                (date, aligned)
            })
            .collect();

        Self {
            projects,
            totals,
            days,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn total_hours(&self) -> f64 {
        self.totals.iter().sum()
    }

    /// Infinite or NaN sums cannot be laid out on an axis or a pie.
    pub fn is_finite(&self) -> bool {
        self.total_hours().is_finite() && self.day_totals().iter().all(|h| h.is_finite())
    }

    pub fn day_totals(&self) -> Vec<f64> {
        self.days.iter().map(|(_, h)| h.iter().sum()).collect()
    }

    pub fn label(&self, index: usize) -> &str {
        match self.projects.get(index).map(String::as_str) {
            Some("") | None => NO_PROJECT_LABEL,
            Some(p) => p,
        }
    }

    /// Stacked segments for the project at `index`, bottom-up in project order.
    ///
    /// Days where the project has no hours yield no segment.
    pub fn segments(&self, index: usize) -> Vec<Segment> {
        self.days
            .iter()
            .enumerate()
            .filter_map(|(day, (_, hours))| {
                let value = *hours.get(index)?;
                if value == 0.0 {
                    return None;
                }
                let bottom: f64 = hours[..index].iter().sum();
                Some(Segment {
                    day,
                    bottom,
                    top: bottom + value,
                })
            })
            .collect()
    }
}
