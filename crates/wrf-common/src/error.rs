//! Error types for corner box construction.

use thiserror::Error;

/// Result type alias using CornerError.
pub type CornerResult<T> = Result<T, CornerError>;

/// Errors raised while resolving a domain's corner points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CornerError {
    #[error("invalid corner point arguments: supply either bottom_left and top_right, or lats and lons")]
    Missing,

    #[error("invalid corner point arguments: corner points and lat/lon grids are mutually exclusive")]
    Ambiguous,

    #[error("invalid corner point arguments: {0} grid is empty")]
    EmptyGrid(&'static str),
}
