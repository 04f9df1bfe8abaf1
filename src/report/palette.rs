use plotters::style::{Color, Palette, Palette99, RGBColor};

/// Colour for the project at `index` in `Summary::projects`, shared by both charts.
pub fn project_color(index: usize) -> RGBColor {
    let (r, g, b) = Palette99::pick(index).rgb();
    RGBColor(r, g, b)
}
