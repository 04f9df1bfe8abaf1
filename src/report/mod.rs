//! Report pipeline: select by range → aggregate → render two PNG charts.

pub mod aggregate;
pub mod daily;
pub mod fonts;
mod palette;
pub mod range;
pub mod total;

pub use aggregate::Summary;
pub use range::DateRange;

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

pub const TOTAL_CHART: &str = "total.png";
pub const DAILY_CHART: &str = "daily.png";
pub const CHART_SIZE: (u32, u32) = (1024, 768);

pub(crate) fn chart_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Chart(e.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPaths {
    pub total: PathBuf,
    pub daily: PathBuf,
}

/// Render both charts into `output_dir`, creating it if needed.
///
/// Existing files with the same names are overwritten; nothing else in
/// the directory is touched.
pub fn write_charts(
    summary: &Summary,
    range: &DateRange,
    output_dir: &Path,
    workday_hours: f64,
    font: Option<&str>,
) -> AppResult<ChartPaths> {
    if !summary.is_finite() {
        return Err(AppError::Chart(
            "hours in range do not sum to a finite number (check the data file for inf/NaN)"
                .to_string(),
        ));
    }
    if !workday_hours.is_finite() {
        return Err(AppError::Config(format!(
            "workday_hours must be a finite number, got {workday_hours}"
        )));
    }

    fs::create_dir_all(output_dir)?;

    let with_text = fonts::ensure_font(font).is_some();
    let title = range.title();

    let paths = ChartPaths {
        total: output_dir.join(TOTAL_CHART),
        daily: output_dir.join(DAILY_CHART),
    };

    total::render(summary, &title, &paths.total, CHART_SIZE, with_text)?;
    daily::render(
        summary,
        &title,
        &paths.daily,
        CHART_SIZE,
        workday_hours,
        with_text,
    )?;

    Ok(paths)
}
