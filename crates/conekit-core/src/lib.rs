//! # ConeKit Core
//!
//! Shared value types and utilities for the ConeKit workspace:
//!
//! - **Units**: conversion between millimeters and inches, display formatting
//! - **Geometry**: cone parameters, 2D points, flattened pattern point sets
//! - **Errors**: parameter validation errors
//!
//! Everything in this crate is a plain value type. Computation over these
//! types lives in `conekit-pattern`; serialization to export formats lives in
//! `conekit-export`.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::ParameterError;
pub use geometry::{ConeParams, PatternPoints, Point2};
pub use units::{format_dimension, from_canonical, to_canonical, Unit};
