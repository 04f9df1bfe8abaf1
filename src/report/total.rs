//! Pie chart of hours per project over the whole range.

use super::aggregate::Summary;
use super::chart_err;
use super::fonts::FAMILY;
use super::palette::project_color;
use crate::errors::AppResult;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::TAU;
use std::path::Path;

/// Angular extent of one pie slice, in radians clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub project: usize,
    pub start: f64,
    pub end: f64,
    pub percent: f64,
}

impl Slice {
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Integer percentage label, e.g. `100 %`.
    pub fn label(&self) -> String {
        format!("{} %", self.percent.round() as i64)
    }
}

/// Slices for every project with positive hours; others cannot be drawn.
pub fn slices(totals: &[f64]) -> Vec<Slice> {
    let sum: f64 = totals.iter().filter(|v| **v > 0.0).sum();
    if sum <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    totals
        .iter()
        .enumerate()
        .filter(|(_, v)| **v > 0.0)
        .map(|(project, v)| {
            let share = v / sum;
            let slice = Slice {
                project,
                start,
                end: start + share * TAU,
                percent: share * 100.0,
            };
            start = slice.end;
            slice
        })
        .collect()
}

fn polar(center: (i32, i32), radius: f64, angle: f64) -> (i32, i32) {
    (
        center.0 + (radius * angle.sin()).round() as i32,
        center.1 - (radius * angle.cos()).round() as i32,
    )
}

fn wedge(center: (i32, i32), radius: f64, slice: &Slice) -> Vec<(i32, i32)> {
    let steps = ((slice.end - slice.start) / TAU * 360.0).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let angle = slice.start + (slice.end - slice.start) * i as f64 / steps as f64;
        points.push(polar(center, radius, angle));
    }
    points
}

pub fn render(
    summary: &Summary,
    title: &str,
    path: &Path,
    size: (u32, u32),
    with_text: bool,
) -> AppResult<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let body = if with_text {
        root.titled(title, (FAMILY, 28)).map_err(chart_err)?
    } else {
        root.clone()
    };

    let (w, h) = body.dim_in_pixel();
    let (pie_area, legend_area) = body.split_horizontally((w as f64 * 0.7) as u32);
    let (pw, _) = pie_area.dim_in_pixel();

    let center = (pw as i32 / 2, h as i32 / 2);
    let radius = (pw.min(h) as f64 / 2.0 - 40.0).max(10.0);

    let pie = slices(&summary.totals);

    if pie.is_empty() {
        pie_area
            .draw(&Circle::new(
                center,
                radius as i32,
                ShapeStyle::from(&RGBColor(200, 200, 200)).stroke_width(2),
            ))
            .map_err(chart_err)?;
        if with_text {
            pie_area
                .draw(&Text::new(
                    "no records in range",
                    center,
                    (FAMILY, 20)
                        .into_font()
                        .color(&RGBColor(120, 120, 120))
                        .pos(Pos::new(HPos::Center, VPos::Center)),
                ))
                .map_err(chart_err)?;
        }
        root.present().map_err(chart_err)?;
        return Ok(());
    }

    for slice in &pie {
        pie_area
            .draw(&Polygon::new(
                wedge(center, radius, slice),
                project_color(slice.project).filled(),
            ))
            .map_err(chart_err)?;
    }

    if with_text {
        let centered = Pos::new(HPos::Center, VPos::Center);

        for slice in &pie {
            pie_area
                .draw(&Text::new(
                    slice.label(),
                    polar(center, radius * 0.6, slice.mid()),
                    (FAMILY, 18).into_font().color(&BLACK).pos(centered),
                ))
                .map_err(chart_err)?;
            pie_area
                .draw(&Text::new(
                    summary.label(slice.project).to_string(),
                    polar(center, radius + 22.0, slice.mid()),
                    (FAMILY, 16).into_font().color(&BLACK).pos(centered),
                ))
                .map_err(chart_err)?;
        }

        // legend: one swatch per project
        for (i, _) in summary.projects.iter().enumerate() {
            let y = 40 + i as i32 * 28;
            legend_area
                .draw(&Rectangle::new(
                    [(10, y), (28, y + 18)],
                    project_color(i).filled(),
                ))
                .map_err(chart_err)?;
            legend_area
                .draw(&Text::new(
                    summary.label(i).to_string(),
                    (36, y + 9),
                    (FAMILY, 16)
                        .into_font()
                        .color(&BLACK)
                        .pos(Pos::new(HPos::Left, VPos::Center)),
                ))
                .map_err(chart_err)?;
        }
    }

    root.present().map_err(chart_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_project_is_a_full_circle() {
        let s = slices(&[2.5]);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].start, 0.0);
        assert!((s[0].end - TAU).abs() < 1e-9);
        assert_eq!(s[0].label(), "100 %");
    }

    #[test]
    fn shares_are_proportional_and_contiguous() {
        let s = slices(&[1.0, 0.0, 3.0]);
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].project, 0);
        assert_eq!(s[1].project, 2);
        assert_eq!(s[0].label(), "25 %");
        assert_eq!(s[1].label(), "75 %");
        assert_eq!(s[0].end, s[1].start);
        assert!((s[1].end - TAU).abs() < 1e-9);
    }

    #[test]
    fn percentages_are_rounded() {
        let s = slices(&[2.0, 1.0]);
        assert_eq!(s[0].label(), "67 %");
        assert_eq!(s[1].label(), "33 %");
    }

    #[test]
    fn nothing_to_draw_without_positive_hours() {
        assert!(slices(&[]).is_empty());
        assert!(slices(&[0.0, -1.0]).is_empty());
    }

    #[test]
    fn wedge_starts_at_center() {
        let slice = slices(&[1.0, 1.0])[0];
        let pts = wedge((100, 100), 50.0, &slice);
        assert_eq!(pts[0], (100, 100));
        assert_eq!(pts[1], (100, 50));
        assert_eq!(*pts.last().unwrap(), (100, 150));
    }
}
