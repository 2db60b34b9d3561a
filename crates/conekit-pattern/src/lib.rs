//! # ConeKit Pattern
//!
//! Geometry engine for ConeKit:
//!
//! - **Solver**: converts cone parameters into flat 2D pattern point sets
//!   (annular/arc top view and trapezoid side view)
//! - **Divisions**: splits a cone's height into percentage-based sections
//!   with interpolated dimensions, for multi-piece fabrication
//!
//! All computation is synchronous and pure: the solver takes a parameter
//! snapshot and returns a new point set, so concurrent use needs no locking.

pub mod divisions;
pub mod error;
pub mod solver;

pub use divisions::{Division, DivisionOrientation, DivisionSet};
pub use error::{DivisionError, DivisionResult};
pub use solver::{compute_pattern, compute_pattern_with_segments, section_params, DEFAULT_SEGMENTS};
