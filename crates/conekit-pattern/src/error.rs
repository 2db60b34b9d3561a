//! Error types for the division allocator.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by [`crate::DivisionSet`] operations.
///
/// All variants are recoverable: the failing operation leaves the set
/// unchanged and the caller surfaces the condition to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DivisionError {
    /// The operation would push total allocated percentage above 100.
    #[error("Total percentage cannot exceed 100% ({available:.1}% available)")]
    CapacityExceeded { available: f64 },

    /// No section with the given id exists.
    #[error("Unknown division: {0}")]
    UnknownDivision(Uuid),

    /// A percentage outside (0, 100] was requested.
    #[error("Percentage must be in (0, 100], got {0}")]
    InvalidPercentage(f64),
}

/// Result type alias for division operations.
pub type DivisionResult<T> = Result<T, DivisionError>;
