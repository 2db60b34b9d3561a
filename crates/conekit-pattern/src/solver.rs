//! Pattern geometry solver
//!
//! Converts cone parameters into the flat 2D point sets that the export
//! encoders serialize. The top view is a pair of arcs (top and bottom edge)
//! separated vertically by the slant height so they do not overlap; the side
//! view is the straight-line trapezoid connecting the two radii at
//! ±height/2.
//!
//! The trapezoid is a deliberate modeling choice carried over from the
//! original fabrication workflow: it is the flat side silhouette, not a true
//! conic unroll.

use conekit_core::{ConeParams, PatternPoints, Point2};
use tracing::debug;

use crate::divisions::Division;

/// Canonical number of arc segments for exported patterns.
///
/// Export artifacts embed the sampled coordinates, so this count is part of
/// the stable output format. Display layers may resample at other
/// resolutions, but every encoder uses this value.
pub const DEFAULT_SEGMENTS: usize = 72;

/// Compute the flat pattern point sets at the canonical export resolution.
///
/// Geometry is computed in the unit the parameters are expressed in; unit
/// conversion is a caller concern. Assumes validated parameters (positive
/// dimensions, angles in [1, 360]) and is total over that domain.
pub fn compute_pattern(params: &ConeParams) -> PatternPoints {
    compute_pattern_with_segments(params, DEFAULT_SEGMENTS)
}

/// Compute the flat pattern point sets with an explicit segment count.
///
/// Non-canonical resolutions are for display use only; exported artifacts
/// must stay at [`DEFAULT_SEGMENTS`] so their bytes remain stable.
pub fn compute_pattern_with_segments(params: &ConeParams, segments: usize) -> PatternPoints {
    let slant_height = params.slant_height();
    let top_radians = params.top_angle.to_radians();
    let bottom_radians = params.bottom_angle.to_radians();

    let mut top = Vec::with_capacity(segments + 1);
    let mut bottom = Vec::with_capacity(segments + 1);

    // Both arcs are centered on angle 0 and sweep from -angle/2 to +angle/2,
    // inclusive of both endpoints. A 360-degree angle closes into a full
    // circle; anything smaller yields a centered arc.
    for i in 0..=segments {
        let t = i as f64 / segments as f64;
        let top_theta = -top_radians / 2.0 + t * top_radians;
        let bottom_theta = -bottom_radians / 2.0 + t * bottom_radians;

        top.push(Point2::new(
            params.top_radius * top_theta.cos(),
            params.top_radius * top_theta.sin() - slant_height / 2.0,
        ));
        bottom.push(Point2::new(
            params.bottom_radius * bottom_theta.cos(),
            params.bottom_radius * bottom_theta.sin() + slant_height / 2.0,
        ));
    }

    let side = [
        Point2::new(-params.bottom_radius, params.height / 2.0),
        Point2::new(-params.top_radius, -params.height / 2.0),
        Point2::new(params.top_radius, -params.height / 2.0),
        Point2::new(params.bottom_radius, params.height / 2.0),
    ];

    debug!(
        segments,
        slant_height,
        top_angle = params.top_angle,
        bottom_angle = params.bottom_angle,
        "computed flat pattern"
    );

    PatternPoints { top, bottom, side }
}

/// Parameter set for one division of a parent cone.
///
/// A division's interpolated dimensions form a valid cone of their own, so
/// the same solver produces its section pattern.
pub fn section_params(parent: &ConeParams, division: &Division) -> ConeParams {
    ConeParams {
        top_radius: division.top_radius,
        bottom_radius: division.bottom_radius,
        height: division.height,
        ..*parent
    }
}
