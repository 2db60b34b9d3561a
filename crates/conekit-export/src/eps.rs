//! EPS encoder
//!
//! Emits an EPSF-3.0 document with the closed top-view outline in the left
//! quadrant and the side trapezoid in the right quadrant. The bounding box
//! is twice the largest absolute coordinate per axis plus a fixed margin.
//!
//! PostScript `translate` is cumulative: the second translate is relative to
//! the already-translated origin. The emitted commands rely on that
//! composition, so the side view target is expressed in the top view's
//! coordinate frame.

use conekit_core::ConeParams;
use conekit_pattern::compute_pattern;
use tracing::debug;

/// Padding added around the pattern extents, in PostScript units.
const MARGIN: f64 = 20.0;

/// Generate the EPS artifact for a cone's flat patterns.
pub fn generate_eps(params: &ConeParams) -> String {
    let points = compute_pattern(params);
    let (extent_x, extent_y) = points.max_extents();
    let max_x = extent_x * 2.0 + MARGIN * 2.0;
    let max_y = extent_y * 2.0 + MARGIN * 2.0;

    let mut eps: Vec<String> = vec![
        "%!PS-Adobe-3.0 EPSF-3.0".into(),
        format!("%%BoundingBox: 0 0 {} {}", max_x, max_y),
        "%%BeginProlog".into(),
        "/mm { 2.834646 mul } def".into(),
        "%%EndProlog".into(),
        String::new(),
        "0.5 setlinewidth".into(),
        "newpath".into(),
        format!("{} {} translate", max_x / 4.0, max_y / 2.0),
    ];

    let outline = points.top_view_outline();
    eps.push(format!("{} {} moveto", outline[0].x, outline[0].y));
    for point in &outline {
        eps.push(format!("{} {} lineto", point.x, point.y));
    }
    eps.push("closepath".into());
    eps.push("stroke".into());
    eps.push(String::new());

    // Cumulative translate: relative to the top view origin above.
    eps.push(format!("{} {} translate", max_x * 3.0 / 4.0, max_y / 2.0));
    eps.push(format!("{} {} moveto", points.side[0].x, points.side[0].y));
    for point in &points.side {
        eps.push(format!("{} {} lineto", point.x, point.y));
    }
    eps.push("closepath".into());
    eps.push("stroke".into());
    eps.push("%%EOF".into());

    debug!(max_x, max_y, "generated EPS document");
    eps.join("\n")
}
