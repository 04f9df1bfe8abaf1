//! Stacked bar chart: one bar per calendar day, one segment per project.

use super::aggregate::Summary;
use super::chart_err;
use super::fonts::FAMILY;
use super::palette::project_color;
use crate::errors::AppResult;
use plotters::prelude::*;
use std::path::Path;

const DASH: i32 = 12;
const GAP: i32 = 8;

/// Upper bound of the y axis: room above the tallest bar and the workday line.
pub fn y_limit(day_totals: &[f64], workday_hours: f64) -> f64 {
    let tallest = day_totals.iter().copied().fold(workday_hours, f64::max);
    (tallest * 1.15).max(1.0)
}

/// Pixel spans `[start, end)` making up a dashed horizontal line.
pub fn dash_spans(x0: i32, x1: i32) -> Vec<(i32, i32)> {
    let mut spans = Vec::new();
    let mut x = x0;
    while x < x1 {
        spans.push((x, (x + DASH).min(x1)));
        x += DASH + GAP;
    }
    spans
}

pub fn render(
    summary: &Summary,
    title: &str,
    path: &Path,
    size: (u32, u32),
    workday_hours: f64,
    with_text: bool,
) -> AppResult<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let n_days = summary.days.len().max(1);
    let labels: Vec<String> = summary
        .days
        .iter()
        .map(|(d, _)| d.format("%Y-%m-%d").to_string())
        .collect();

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if with_text {
        builder
            .caption(title, (FAMILY, 28))
            .x_label_area_size(110)
            .y_label_area_size(60);
    }

    let mut chart = builder
        .build_cartesian_2d(
            (0..n_days).into_segmented(),
            0f64..y_limit(&summary.day_totals(), workday_hours),
        )
        .map_err(chart_err)?;

    if with_text {
        let date_label = |v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            // integer ranges are inclusive: one trailing empty segment
            .x_labels(n_days + 1)
            .x_label_formatter(&date_label)
            .x_label_style(
                (FAMILY, 14)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .y_desc("hours")
            .axis_desc_style((FAMILY, 16))
            .draw()
            .map_err(chart_err)?;
    }

    for (p, _) in summary.projects.iter().enumerate() {
        let color = project_color(p);
        let bars = summary.segments(p).into_iter().map(|seg| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(seg.day), seg.bottom),
                    (SegmentValue::Exact(seg.day + 1), seg.top),
                ],
                color.filled(),
            );
            bar.set_margin(0, 0, 6, 6);
            bar
        });

        let series = chart.draw_series(bars).map_err(chart_err)?;
        if with_text {
            series
                .label(summary.label(p).to_string())
                .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.filled()));
        }
    }

    // reference line for a standard workday
    let (x0, y) = chart.backend_coord(&(SegmentValue::Exact(0), workday_hours));
    let (x1, _) = chart.backend_coord(&(SegmentValue::Exact(n_days), workday_hours));
    let line_style = ShapeStyle::from(&BLACK).stroke_width(2);
    for (a, b) in dash_spans(x0, x1) {
        root.draw(&PathElement::new(vec![(a, y), (b, y)], line_style))
            .map_err(chart_err)?;
    }

    if with_text && !summary.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font((FAMILY, 14))
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()
            .map_err(chart_err)?;
    }

    root.present().map_err(chart_err)?;
    Ok(())
}
