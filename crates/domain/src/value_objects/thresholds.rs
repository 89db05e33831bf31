//! Advisory thresholds value object

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Snow accumulation and wind limits that drive the advisory
///
/// Both limits are finite and non-negative; construction and
/// deserialization reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct Thresholds {
    /// Trailing 24h snowfall (inches) at which clearing is recommended
    accumulation_threshold: f64,
    /// Highest wind speed (mph) considered safe for snowblowing
    max_wind_speed: f64,
}

#[derive(Deserialize)]
struct RawThresholds {
    accumulation_threshold: f64,
    max_wind_speed: f64,
}

impl TryFrom<RawThresholds> for Thresholds {
    type Error = DomainError;

    fn try_from(raw: RawThresholds) -> Result<Self, Self::Error> {
        Self::new(raw.accumulation_threshold, raw.max_wind_speed)
    }
}

fn check(name: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DomainError::invalid_threshold(name, value))
    }
}

impl Thresholds {
    /// Create validated thresholds
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidThreshold` if either value is negative,
    /// infinite or NaN.
    pub fn new(accumulation_threshold: f64, max_wind_speed: f64) -> Result<Self, DomainError> {
        Ok(Self {
            accumulation_threshold: check("accumulation_threshold", accumulation_threshold)?,
            max_wind_speed: check("max_wind_speed", max_wind_speed)?,
        })
    }

    /// Accumulation threshold in inches
    #[must_use]
    pub const fn accumulation_threshold(&self) -> f64 {
        self.accumulation_threshold
    }

    /// Maximum safe wind speed in mph
    #[must_use]
    pub const fn max_wind_speed(&self) -> f64 {
        self.max_wind_speed
    }

    /// Whether the given wind speed is at or below the safe maximum
    #[must_use]
    pub fn is_wind_safe(&self, wind_speed_mph: f64) -> bool {
        wind_speed_mph <= self.max_wind_speed
    }

    /// Whether an accumulation meets the threshold
    #[must_use]
    pub fn is_exceeded_by(&self, accumulation: f64) -> bool {
        accumulation >= self.accumulation_threshold
    }

    /// Inches still missing before the threshold is reached (never negative)
    #[must_use]
    pub fn remaining(&self, accumulation: f64) -> f64 {
        (self.accumulation_threshold - accumulation).max(0.0)
    }
}
