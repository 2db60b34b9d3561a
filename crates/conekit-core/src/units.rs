//! Unit conversion utilities
//!
//! Handles conversion between millimeters and inches. Millimeters are the
//! canonical unit; inch values are converted with the exact factor 25.4.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters per inch, exact by definition.
pub const MM_PER_INCH: f64 = 25.4;

/// Measurement unit for cone dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Millimeters
    #[serde(rename = "mm")]
    Millimeters,
    /// Inches
    #[serde(rename = "in")]
    Inches,
}

impl Default for Unit {
    fn default() -> Self {
        Self::Millimeters
    }
}

impl Unit {
    /// Short label for display and file headers ("mm" or "in")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Inches => "in",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "metric" => Ok(Self::Millimeters),
            "in" | "inch" | "inches" | "imperial" => Ok(Self::Inches),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}

/// Convert a value in the given unit to canonical millimeters.
///
/// Identity for millimeters; multiplies by 25.4 for inches.
pub fn to_canonical(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Millimeters => value,
        Unit::Inches => value * MM_PER_INCH,
    }
}

/// Convert a canonical millimeter value back to the given unit.
pub fn from_canonical(value_mm: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Millimeters => value_mm,
        Unit::Inches => value_mm / MM_PER_INCH,
    }
}

/// Format a dimension value for display labels.
///
/// Millimeter values are rounded to the nearest integer; inch values are
/// fixed at 3 decimal places. This only affects human-facing labels (file
/// headers, dimension tables); exported coordinates are never rounded this
/// way.
pub fn format_dimension(value: f64, unit: Unit) -> String {
    match unit {
        Unit::Millimeters => format!("{}", value.round() as i64),
        Unit::Inches => format!("{:.3}", value),
    }
}
