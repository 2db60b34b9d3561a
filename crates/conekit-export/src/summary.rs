//! Plain-text dimension summary, the textual counterpart of the printable
//! template header.

use conekit_core::{format_dimension, ConeParams};

/// Render the dimension table for a project as plain text.
///
/// Values use the display formatting rule (integer millimeters, 3-decimal
/// inches); angles are printed in degrees.
pub fn dimension_summary(project_name: &str, params: &ConeParams) -> String {
    let name = if project_name.trim().is_empty() {
        "Cone Pattern"
    } else {
        project_name
    };
    let unit = params.unit;

    [
        name.to_string(),
        format!(
            "Top Radius: {} {}",
            format_dimension(params.top_radius, unit),
            unit
        ),
        format!(
            "Bottom Radius: {} {}",
            format_dimension(params.bottom_radius, unit),
            unit
        ),
        format!("Height: {} {}", format_dimension(params.height, unit), unit),
        format!("Top Arc Angle: {}\u{b0}", params.top_angle),
        format!("Bottom Arc Angle: {}\u{b0}", params.bottom_angle),
    ]
    .join("\n")
}
