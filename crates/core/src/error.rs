//! Error types for tessera layout primitives.

use thiserror::Error;

/// Primary error type for geometry and parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("invalid geometry: {field} = {value}")]
    InvalidGeometry { field: &'static str, value: f64 },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("index {index} out of range for container of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience Result type alias for LayoutError.
pub type Result<T> = std::result::Result<T, LayoutError>;
