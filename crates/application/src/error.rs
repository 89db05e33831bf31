//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Weather data could not be fetched or was malformed
    #[error("Weather data unavailable: {0}")]
    DataUnavailable(String),

    /// Settings out of their valid range, detected at startup
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Out-of-range coordinates or thresholds only arise from settings
impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        Self::InvalidConfiguration(err.to_string())
    }
}

impl ApplicationError {
    /// Create a data unavailable error
    pub fn data_unavailable(reason: impl Into<String>) -> Self {
        Self::DataUnavailable(reason.into())
    }

    /// Check if the failure came from the weather source
    pub const fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::DataUnavailable(_))
    }
}
