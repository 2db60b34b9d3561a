//! Artifact file writing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use conekit_core::ConeParams;
use tracing::info;

use crate::coordinates::generate_coordinates;
use crate::dxf::generate_dxf;
use crate::eps::generate_eps;
use crate::filename::export_filename;
use crate::format::ExportFormat;

/// Encode one artifact and write it under `dir` with its derived filename.
///
/// Returns the path of the written file.
pub fn write_artifact(
    params: &ConeParams,
    format: ExportFormat,
    project_name: &str,
    dir: &Path,
) -> io::Result<PathBuf> {
    let content = match format {
        ExportFormat::Dxf => generate_dxf(params),
        ExportFormat::Eps => generate_eps(params),
        ExportFormat::Coordinates => generate_coordinates(params),
    };
    let path = dir.join(export_filename(project_name, format));
    fs::write(&path, content)?;
    info!(format = %format, path = %path.display(), "wrote export artifact");
    Ok(path)
}

/// Write all three artifacts for a cone, returning the written paths.
pub fn write_all_artifacts(
    params: &ConeParams,
    project_name: &str,
    dir: &Path,
) -> io::Result<Vec<PathBuf>> {
    ExportFormat::ALL
        .iter()
        .map(|&format| write_artifact(params, format, project_name, dir))
        .collect()
}
