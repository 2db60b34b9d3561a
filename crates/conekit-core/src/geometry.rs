//! Cone parameters and flattened pattern geometry types.

use crate::error::{ParameterError, ParameterResult};
use crate::units::Unit;
use serde::{Deserialize, Serialize};

/// A 2D point in pattern space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2 {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Parameters describing a truncated cone or cylinder.
///
/// All dimensions are expressed in `unit`. Radii and height must be
/// positive; arc angles are degrees in `[1, 360]` where 360 is a full
/// circle. The pattern solver and the encoders assume these constraints
/// hold; callers enforce them with [`ConeParams::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeParams {
    /// Radius of the top edge.
    pub top_radius: f64,
    /// Radius of the bottom edge.
    pub bottom_radius: f64,
    /// Vertical height between the two edges.
    pub height: f64,
    /// Unit the dimensions are expressed in.
    pub unit: Unit,
    /// Angular extent of the top arc in degrees.
    pub top_angle: f64,
    /// Angular extent of the bottom arc in degrees.
    pub bottom_angle: f64,
    /// When set, both arcs are forced to a full 360 degrees.
    pub auto_close: bool,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            top_radius: 2.0,
            bottom_radius: 4.0,
            height: 8.0,
            unit: Unit::Inches,
            top_angle: 180.0,
            bottom_angle: 180.0,
            auto_close: false,
        }
    }
}

impl ConeParams {
    /// Slant height of the cone: the straight-line distance between the top
    /// and bottom edges. Separates the two arcs in the flattened top view.
    pub fn slant_height(&self) -> f64 {
        (self.height.powi(2) + (self.bottom_radius - self.top_radius).powi(2)).sqrt()
    }

    /// Apply the `auto_close` constraint, forcing both angles to 360.
    pub fn normalized(mut self) -> Self {
        if self.auto_close {
            self.top_angle = 360.0;
            self.bottom_angle = 360.0;
        }
        self
    }

    /// Fail-fast precondition check for out-of-contract parameters.
    pub fn validate(&self) -> ParameterResult<()> {
        let positives = [
            ("top_radius", self.top_radius),
            ("bottom_radius", self.bottom_radius),
            ("height", self.height),
        ];
        for (name, value) in positives {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { name, value });
            }
            if value <= 0.0 {
                return Err(ParameterError::NonPositive { name, value });
            }
        }
        let angles = [
            ("top_angle", self.top_angle),
            ("bottom_angle", self.bottom_angle),
        ];
        for (name, value) in angles {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { name, value });
            }
            if !(1.0..=360.0).contains(&value) {
                return Err(ParameterError::AngleOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

/// Flattened 2D pattern point sets for a cone.
///
/// `top` and `bottom` sample the two arcs of the flattened top view over the
/// same normalized angle range, so index `i` in each corresponds to the same
/// angular position. `side` is the 4-point trapezoid silhouette of the
/// unrolled side profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternPoints {
    /// Samples along the top arc, `segments + 1` points.
    pub top: Vec<Point2>,
    /// Samples along the bottom arc, same length as `top`.
    pub bottom: Vec<Point2>,
    /// Trapezoid outline of the side profile.
    pub side: [Point2; 4],
}

impl PatternPoints {
    /// Closed top-view outline: top arc forward, then bottom arc reversed.
    pub fn top_view_outline(&self) -> Vec<Point2> {
        let mut outline = self.top.clone();
        outline.extend(self.bottom.iter().rev().copied());
        outline
    }

    /// Maximum absolute X and Y across all three point lists.
    pub fn max_extents(&self) -> (f64, f64) {
        let mut max_x: f64 = 0.0;
        let mut max_y: f64 = 0.0;
        for p in self
            .top
            .iter()
            .chain(self.bottom.iter())
            .chain(self.side.iter())
        {
            max_x = max_x.max(p.x.abs());
            max_y = max_y.max(p.y.abs());
        }
        (max_x, max_y)
    }
}
