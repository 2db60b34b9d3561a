//! # ConeKit
//!
//! Flat-pattern generator for truncated cones and cylinders. Given a
//! parameter set (radii, height, arc angles, unit system), ConeKit computes
//! the flat 2D patterns needed to roll the shape from sheet material and
//! writes them as DXF, EPS, and plain-text coordinate artifacts.
//!
//! ## Architecture
//!
//! ConeKit is organized as a workspace with three library crates:
//!
//! 1. **conekit-core** - parameter and pattern value types, unit conversion
//! 2. **conekit-pattern** - pattern geometry solver and division allocator
//! 3. **conekit-export** - DXF/EPS/coordinate encoders and file writing
//!
//! The root crate is the composition root: a small CLI that loads a JSON
//! parameter file, validates it, and writes all three artifacts.

use std::path::{Path, PathBuf};

use anyhow::Context;

pub use conekit_core::{
    format_dimension, from_canonical, to_canonical, ConeParams, ParameterError, PatternPoints,
    Point2, Unit,
};
pub use conekit_export::{
    dimension_summary, export_filename, generate_coordinates, generate_dxf, generate_eps,
    write_all_artifacts, write_artifact, ExportFormat,
};
pub use conekit_pattern::{
    compute_pattern, compute_pattern_with_segments, section_params, Division, DivisionError,
    DivisionOrientation, DivisionSet, DEFAULT_SEGMENTS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured console logging with `RUST_LOG` environment variable
/// support, defaulting to INFO.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load a parameter file, validate it, and write all export artifacts.
///
/// The parameter file is JSON deserializing into [`ConeParams`]; missing
/// fields take their defaults. Returns the written paths.
pub fn run_export(
    params_path: &Path,
    output_dir: &Path,
    project_name: &str,
) -> anyhow::Result<Vec<PathBuf>> {
    let raw = std::fs::read_to_string(params_path)
        .with_context(|| format!("failed to read parameter file {}", params_path.display()))?;
    let params: ConeParams = serde_json::from_str(&raw)
        .with_context(|| format!("invalid parameter file {}", params_path.display()))?;

    let params = params.normalized();
    params.validate().context("invalid cone parameters")?;

    let paths = write_all_artifacts(&params, project_name, output_dir)
        .with_context(|| format!("failed to write artifacts to {}", output_dir.display()))?;
    Ok(paths)
}
