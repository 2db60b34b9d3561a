//! Export filename derivation.

use crate::format::ExportFormat;

/// Fallback base name when the project name is blank.
const DEFAULT_BASE: &str = "cone-pattern";

/// Derive the export filename for a project and format.
///
/// Runs of non-alphanumeric characters collapse to a single `-` and the
/// result is lower-cased; a blank project name falls back to
/// `cone-pattern`.
pub fn export_filename(project_name: &str, format: ExportFormat) -> String {
    format!("{}.{}", base_name(project_name), format.extension())
}

fn base_name(project_name: &str) -> String {
    if project_name.trim().is_empty() {
        return DEFAULT_BASE.to_string();
    }

    let mut base = String::with_capacity(project_name.len());
    let mut pending_dash = false;
    for c in project_name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash {
                base.push('-');
                pending_dash = false;
            }
            base.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    // A trailing run of replaced characters still leaves its dash.
    if pending_dash {
        base.push('-');
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_characters_collapse() {
        assert_eq!(
            export_filename("My Part #1!", ExportFormat::Dxf),
            "my-part-1-.dxf"
        );
    }

    #[test]
    fn test_plain_name() {
        assert_eq!(
            export_filename("FlueAdapter", ExportFormat::Eps),
            "flueadapter.eps"
        );
    }

    #[test]
    fn test_blank_name_falls_back() {
        assert_eq!(
            export_filename("", ExportFormat::Coordinates),
            "cone-pattern.txt"
        );
        assert_eq!(export_filename("   ", ExportFormat::Dxf), "cone-pattern.dxf");
    }

    #[test]
    fn test_leading_separator_kept_as_dash() {
        assert_eq!(export_filename("#42", ExportFormat::Dxf), "-42.dxf");
    }
}
