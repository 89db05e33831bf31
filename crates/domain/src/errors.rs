//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude range
    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// A threshold that is negative or not a finite number
    #[error("Invalid threshold {name}: {value} (must be a finite number >= 0)")]
    InvalidThreshold { name: &'static str, value: f64 },
}

impl DomainError {
    /// Create an invalid threshold error
    pub const fn invalid_threshold(name: &'static str, value: f64) -> Self {
        Self::InvalidThreshold { name, value }
    }
}
