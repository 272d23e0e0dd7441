//! Custom error types for geometry operations

use std::fmt;

/// Geometry-specific error types
#[derive(Debug)]
pub enum GeometryError {
    /// Box and point are classified in incompatible coordinate systems
    SystemMismatch(String, String),
    /// A coordinate value could not be parsed
    InvalidCoordinate(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::SystemMismatch(b, p) => {
                write!(f, "Incompatible coordinate systems: box is {}, point is {}", b, p)
            },
            GeometryError::InvalidCoordinate(v) => write!(f, "Invalid coordinate value: {}", v),
            GeometryError::GenericError(msg) => write!(f, "Geometry error: {}", msg),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;

impl From<String> for GeometryError {
    fn from(msg: String) -> Self {
        GeometryError::GenericError(msg)
    }
}
