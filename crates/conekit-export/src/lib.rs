//! # ConeKit Export
//!
//! Serializers that turn flat pattern point sets into fabrication
//! artifacts:
//!
//! - **DXF**: minimal R12-style ASCII polyline stream for CAD import
//! - **EPS**: EPSF-3.0 document for vector tools and printing
//! - **Coordinates**: human-readable plain-text point listing
//!
//! All three encoders derive their geometry from the same
//! [`conekit_pattern::compute_pattern`] result, so their extents always
//! agree. Each encoder is a pure function of the cone parameters; malformed
//! input is rejected upstream by `ConeParams::validate`, never here.

pub mod coordinates;
pub mod dxf;
pub mod eps;
pub mod filename;
pub mod format;
pub mod summary;
pub mod writer;

pub use coordinates::generate_coordinates;
pub use dxf::generate_dxf;
pub use eps::generate_eps;
pub use filename::export_filename;
pub use format::ExportFormat;
pub use summary::dimension_summary;
pub use writer::{write_all_artifacts, write_artifact};
