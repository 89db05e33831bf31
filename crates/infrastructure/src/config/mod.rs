//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `SNOWBLOWER_*` environment variables (nested keys separated by
//! `__`, e.g. `SNOWBLOWER_ADVISOR__ACCUMULATION_THRESHOLD=3.5`).

mod advisor;

use std::path::Path;

use application::{AdvisorSettings, ApplicationError};
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::telemetry::LoggingConfig;

pub use advisor::{
    AdvisorConfig, DEFAULT_ACCUMULATION_THRESHOLD, DEFAULT_LATITUDE, DEFAULT_LOCATION_NAME,
    DEFAULT_LONGITUDE, DEFAULT_MAX_WIND_SPEED, LocationConfig,
};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SNOWBLOWER";

/// Separator for nested keys in environment variables
pub const ENV_SEPARATOR: &str = "__";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but are out of range
    #[error(transparent)]
    Invalid(#[from] ApplicationError),
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Advisory location
    #[serde(default)]
    pub location: LocationConfig,

    /// Accumulation and wind thresholds
    #[serde(default)]
    pub advisor: AdvisorConfig,

    /// Open-Meteo client settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    ///
    /// # Errors
    ///
    /// Fails if a source cannot be parsed or validation rejects a value.
    pub fn load() -> Result<Self, ConfigLoadError> {
        let file = config::File::with_name("config").required(false);
        Self::build(file, Self::environment())
    }

    /// Load configuration from an explicit file path and environment
    ///
    /// # Errors
    ///
    /// Fails if the file is missing or unparsable, or validation fails.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigLoadError> {
        let file = config::File::from(path).required(true);
        Self::build(file, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
    }

    fn build<F>(file: F, env: config::Environment) -> Result<Self, ConfigLoadError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("location.latitude", DEFAULT_LATITUDE)?
            .set_default("location.longitude", DEFAULT_LONGITUDE)?
            .set_default("location.name", DEFAULT_LOCATION_NAME)?
            .set_default("advisor.accumulation_threshold", DEFAULT_ACCUMULATION_THRESHOLD)?
            .set_default("advisor.max_wind_speed", DEFAULT_MAX_WIND_SPEED)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .add_source(file)
            .add_source(env);

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;

        debug!(
            location = %config.location.name.as_deref().unwrap_or("-"),
            accumulation_threshold = config.advisor.accumulation_threshold,
            max_wind_speed = config.advisor.max_wind_speed,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check every value is in range
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidConfiguration` naming the first bad value.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.advisor_settings()?;

        let weather = &self.weather;
        if weather.timeout_secs == 0 {
            return Err(invalid("weather.timeout_secs must be greater than 0"));
        }
        if !(weather.base_url.starts_with("http://") || weather.base_url.starts_with("https://")) {
            return Err(invalid(format!(
                "weather.base_url must be an http(s) URL, got '{}'",
                weather.base_url
            )));
        }
        if !(1..=16).contains(&weather.forecast_days) {
            return Err(invalid("weather.forecast_days must be between 1 and 16"));
        }
        if weather.past_days > 92 {
            return Err(invalid("weather.past_days must be at most 92"));
        }

        if !self.logging.has_known_level() {
            return Err(invalid(format!(
                "logging.level must be one of trace, debug, info, warn, error; got '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Build the advisory settings from the location and threshold sections
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidConfiguration` for out-of-range
    /// coordinates or thresholds.
    pub fn advisor_settings(&self) -> Result<AdvisorSettings, ApplicationError> {
        Ok(AdvisorSettings {
            location: self.location.to_location()?,
            thresholds: self.advisor.to_thresholds()?,
        })
    }
}

fn invalid(reason: impl Into<String>) -> ApplicationError {
    ApplicationError::InvalidConfiguration(reason.into())
}
