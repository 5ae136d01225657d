//! Error types for projection translation.

use crate::capability::Capability;
use thiserror::Error;
use wrf_common::CornerError;

/// Result type for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Error types for projection construction and output building.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// Corner specification missing, partial, or mixed
    #[error(transparent)]
    Corners(#[from] CornerError),

    /// The requested output format is not available or has been disabled
    #[error("'{0}' is not installed or is disabled")]
    CapabilityUnavailable(Capability),

    /// The projection has no value for the requested quantity
    #[error("{0} is undefined for a null projection")]
    Undefined(&'static str),

    /// A descriptor could not be set up or a point could not be projected
    #[error("cannot transform with '{descriptor}': {reason}")]
    Transform { descriptor: String, reason: String },
}

impl ProjectionError {
    pub(crate) fn transform(descriptor: &str, err: impl std::fmt::Display) -> Self {
        ProjectionError::Transform {
            descriptor: descriptor.to_string(),
            reason: err.to_string(),
        }
    }
}
