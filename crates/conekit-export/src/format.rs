//! Export format metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The output formats ConeKit can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Minimal ASCII DXF polyline stream.
    Dxf,
    /// Encapsulated PostScript document.
    Eps,
    /// Plain-text coordinate listing.
    Coordinates,
}

impl ExportFormat {
    /// All formats, in the order artifacts are written.
    pub const ALL: [ExportFormat; 3] = [Self::Dxf, Self::Eps, Self::Coordinates];

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Dxf => "dxf",
            Self::Eps => "eps",
            Self::Coordinates => "txt",
        }
    }

    /// MIME type for download/save dialogs.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Dxf => "application/dxf",
            Self::Eps => "application/postscript",
            Self::Coordinates => "text/plain",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dxf => write!(f, "DXF"),
            Self::Eps => write!(f, "EPS"),
            Self::Coordinates => write!(f, "Coordinates"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(ExportFormat::Dxf.extension(), "dxf");
        assert_eq!(ExportFormat::Eps.mime_type(), "application/postscript");
        assert_eq!(ExportFormat::Coordinates.extension(), "txt");
        assert_eq!(ExportFormat::Dxf.to_string(), "DXF");
    }
}
