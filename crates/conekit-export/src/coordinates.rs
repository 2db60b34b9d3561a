//! Coordinate-text encoder
//!
//! Human-readable listing of every pattern point, intended for debugging
//! and interchange rather than CAD import. The header labels carry the
//! display-formatted parameter values in the cone's original unit;
//! coordinates themselves are fixed at 3 decimal places.

use conekit_core::{format_dimension, ConeParams, Point2};
use conekit_pattern::compute_pattern;

/// Generate the plain-text coordinate artifact.
pub fn generate_coordinates(params: &ConeParams) -> String {
    let points = compute_pattern(params);
    let unit = params.unit;

    let mut lines: Vec<String> = vec![
        "CONE PATTERN COORDINATES".into(),
        format!(
            "Top Radius: {}{}",
            format_dimension(params.top_radius, unit),
            unit
        ),
        format!(
            "Bottom Radius: {}{}",
            format_dimension(params.bottom_radius, unit),
            unit
        ),
        format!("Height: {}{}", format_dimension(params.height, unit), unit),
        String::new(),
        "TOP VIEW COORDINATES (X,Y):".into(),
        String::new(),
    ];

    push_section(&mut lines, "TOP", &points.top);
    lines.push(String::new());
    lines.push("BOTTOM VIEW COORDINATES (X,Y):".into());
    lines.push(String::new());
    push_section(&mut lines, "BOTTOM", &points.bottom);
    lines.push(String::new());
    lines.push("SIDE VIEW COORDINATES (X,Y):".into());
    lines.push(String::new());
    push_section(&mut lines, "SIDE", &points.side);

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, label: &str, points: &[Point2]) {
    for (i, point) in points.iter().enumerate() {
        lines.push(format!("{}_{}: {:.3},{:.3}", label, i, point.x, point.y));
    }
}
