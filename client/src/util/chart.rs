//! Pure geometry for the SVG curve chart.
//!
//! Maps curve samples from math coordinates (x ∈ [0, 1], y ∈ [0, y_max])
//! into the fixed SVG viewBox, and renders them as path data strings. Kept
//! free of any view code so the mapping is testable.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use crate::math::CurvePoint;

/// Fixed SVG viewBox size; the element scales responsively via CSS.
pub const VIEW_WIDTH: f64 = 640.0;
pub const VIEW_HEIGHT: f64 = 360.0;

/// Padding between the viewBox edge and the plot area (axis labels live here).
pub const PAD_LEFT: f64 = 42.0;
pub const PAD_RIGHT: f64 = 18.0;
pub const PAD_TOP: f64 = 18.0;
pub const PAD_BOTTOM: f64 = 30.0;

/// Map x ∈ [0, 1] to a horizontal viewBox coordinate.
#[must_use]
pub fn x_to_screen(x: f64) -> f64 {
    PAD_LEFT + x * (VIEW_WIDTH - PAD_LEFT - PAD_RIGHT)
}

/// Map y ∈ [0, y_max] to a vertical viewBox coordinate. SVG y grows
/// downward, so y = 0 lands on the baseline.
#[must_use]
pub fn y_to_screen(y: f64, y_max: f64) -> f64 {
    let plot_height = VIEW_HEIGHT - PAD_TOP - PAD_BOTTOM;
    VIEW_HEIGHT - PAD_BOTTOM - (y / y_max) * plot_height
}

/// Path data for the curve stroke: `M x0 y0 L x1 y1 ...`.
#[must_use]
pub fn line_path(points: &[CurvePoint], y_max: f64) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let x = x_to_screen(p.x);
        let y = y_to_screen(p.y, y_max);
        d.push_str(&format!("{cmd}{x:.2} {y:.2} "));
    }
    d.trim_end().to_string()
}

/// Path data for the filled area under the curve: the stroke path extended
/// down to the baseline and closed.
#[must_use]
pub fn area_path(points: &[CurvePoint], y_max: f64) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut d = line_path(points, y_max);
    let baseline = y_to_screen(0.0, y_max);
    let last_x = x_to_screen(points[points.len() - 1].x);
    let first_x = x_to_screen(points[0].x);
    d.push_str(&format!(" L{last_x:.2} {baseline:.2} L{first_x:.2} {baseline:.2} Z"));
    d
}
