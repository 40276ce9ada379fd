//! Error types for the Scene3D camera crate
//!
//! Camera operations rarely fail. The variants below cover invalid input
//! vectors, rejected projection parameters and camera kinds that exist
//! only as placeholders.

use std::fmt;

/// Result type for Scene3D camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Scene3D camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input cannot construct a 3-component vector
    InvalidVector(String),

    /// Projection parameters rejected (fov, aspect, near/far planes)
    InvalidProjection(String),

    /// Capability declared but not implemented (orthographic projection)
    Unimplemented(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidVector(msg) => write!(f, "Invalid vector: {}", msg),
            Error::InvalidProjection(msg) => write!(f, "Invalid projection: {}", msg),
            Error::Unimplemented(what) => write!(f, "Not implemented: {}", what),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
