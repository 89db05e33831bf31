//! Location and threshold configuration sections

use domain::{DomainError, GeoLocation, Location, Thresholds};
use serde::{Deserialize, Serialize};

/// Horace, ND
pub const DEFAULT_LATITUDE: f64 = 46.780_404_848_922_245;
pub const DEFAULT_LONGITUDE: f64 = -96.895_427_772_791_59;
pub const DEFAULT_LOCATION_NAME: &str = "Unknown Location";

pub const DEFAULT_ACCUMULATION_THRESHOLD: f64 = 2.0;
pub const DEFAULT_MAX_WIND_SPEED: f64 = 25.0;

/// The point the advisor reports on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Latitude (-90.0 to 90.0)
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// Display name
    #[serde(default = "default_location_name")]
    pub name: Option<String>,
}

const fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

const fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

#[allow(clippy::unnecessary_wraps)]
fn default_location_name() -> Option<String> {
    Some(DEFAULT_LOCATION_NAME.to_string())
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            name: default_location_name(),
        }
    }
}

impl LocationConfig {
    /// Convert to the domain `Location`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` for out-of-range values.
    pub fn to_location(&self) -> Result<Location, DomainError> {
        let coordinates = GeoLocation::new(self.latitude, self.longitude)?;
        Ok(Location::new(coordinates, self.name.clone()))
    }
}

/// Advisory thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Trailing 24h snowfall in inches that calls for clearing
    #[serde(default = "default_accumulation_threshold")]
    pub accumulation_threshold: f64,
    /// Highest safe wind speed in mph
    #[serde(default = "default_max_wind_speed")]
    pub max_wind_speed: f64,
}

const fn default_accumulation_threshold() -> f64 {
    DEFAULT_ACCUMULATION_THRESHOLD
}

const fn default_max_wind_speed() -> f64 {
    DEFAULT_MAX_WIND_SPEED
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            accumulation_threshold: default_accumulation_threshold(),
            max_wind_speed: default_max_wind_speed(),
        }
    }
}

impl AdvisorConfig {
    /// Convert to domain `Thresholds`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidThreshold` for negative or non-finite values.
    pub fn to_thresholds(&self) -> Result<Thresholds, DomainError> {
        Thresholds::new(self.accumulation_threshold, self.max_wind_speed)
    }
}
