use crate::errors::AppResult;
use crate::report::{self, ChartPaths, DateRange, Summary};
use crate::store::DataFile;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use std::path::Path;

pub struct ReportOptions<'a> {
    pub output_dir: &'a Path,
    pub workday_hours: f64,
    pub font: Option<&'a str>,
}

#[derive(Debug)]
pub struct ReportOutcome {
    pub selected: usize,
    pub summary: Summary,
    pub charts: ChartPaths,
}

/// High-level business logic for the `report` command.
pub struct ReportLogic;

impl ReportLogic {
    pub fn run(
        store: &DataFile,
        range: &DateRange,
        opts: &ReportOptions<'_>,
    ) -> AppResult<ReportOutcome> {
        let records = store.load()?;
        let selected = range.select(&records);

        header(format!("Report {}", range.title()));

        if range.is_inverted() {
            warning("--from-date is after --to-date: the range is empty");
        }

        if selected.is_empty() {
            warning(format!(
                "No records between {} ({} records in file)",
                range.title(),
                records.len()
            ));
        } else {
            info(format!(
                "{} of {} records in range",
                selected.len(),
                records.len()
            ));
        }

        let summary = Summary::from_records(selected.iter().copied());

        let charts = report::write_charts(
            &summary,
            range,
            opts.output_dir,
            opts.workday_hours,
            opts.font,
        )?;

        if !summary.is_empty() {
            println!("{}", totals_table(&summary));
        }

        success(format!("Total chart: {}", charts.total.display()));
        success(format!("Daily chart: {}", charts.daily.display()));

        Ok(ReportOutcome {
            selected: selected.len(),
            summary,
            charts,
        })
    }
}

fn totals_table(summary: &Summary) -> String {
    let total = summary.total_hours();

    let mut table = Table::new(vec![
        Column::left("project"),
        Column::right("hours"),
        Column::right("share"),
    ]);

    for (i, hours) in summary.totals.iter().enumerate() {
        let share = if total > 0.0 { hours / total * 100.0 } else { 0.0 };
        table.add_row(vec![
            summary.label(i).to_string(),
            format!("{hours:.2}"),
            format!("{share:.0} %"),
        ]);
    }
    table.add_row(vec!["total".to_string(), format!("{total:.2}"), String::new()]);

    let rendered = table.render();
    match rendered.split_once('\n') {
        Some((head, body)) => format!("{}\n{}", Colour::Cyan.bold().paint(head), body),
        None => rendered,
    }
}
