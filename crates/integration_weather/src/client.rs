//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo forecast API, requesting current
//! conditions plus hourly snowfall and wind around the present hour.

use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiResponse, CurrentConditions, HourlyConditions, SnowForecast};

/// Variables requested for the current block
const CURRENT_VARIABLES: &str = "temperature_2m,snowfall,wind_speed_10m,wind_direction_10m";

/// Variables requested for the hourly block
const HOURLY_VARIABLES: &str = "snowfall,wind_speed_10m,wind_direction_10m,temperature_2m";

/// Open-Meteo accepts at most this many past days
const MAX_PAST_DAYS: u8 = 92;

/// Open-Meteo accepts at most this many forecast days
const MAX_FORECAST_DAYS: u8 = 16;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// No response within the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Days of history to request (0-92, default: 1)
    #[serde(default = "default_past_days")]
    pub past_days: u8,

    /// Days of forecast to request (1-16, default: 2)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_past_days() -> u8 {
    1
}

const fn default_forecast_days() -> u8 {
    2
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            past_days: default_past_days(),
            forecast_days: default_forecast_days(),
        }
    }
}

/// Weather client trait for fetching snow forecasts
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch current conditions and the hourly series for a location
    async fn get_snow_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<SnowForecast, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Active configuration
    pub const fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    /// Query parameters for a forecast request
    fn forecast_query(&self, latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", CURRENT_VARIABLES.to_string()),
            ("hourly", HOURLY_VARIABLES.to_string()),
            ("temperature_unit", "fahrenheit".to_string()),
            ("wind_speed_unit", "mph".to_string()),
            ("precipitation_unit", "inch".to_string()),
            ("timezone", "auto".to_string()),
            (
                "past_days",
                self.config.past_days.min(MAX_PAST_DAYS).to_string(),
            ),
            (
                "forecast_days",
                self.config
                    .forecast_days
                    .clamp(1, MAX_FORECAST_DAYS)
                    .to_string(),
            ),
        ]
    }

    fn map_transport_error(&self, e: &reqwest::Error) -> WeatherError {
        if e.is_timeout() {
            WeatherError::Timeout(self.config.timeout_secs)
        } else if e.is_connect() {
            WeatherError::ConnectionFailed(e.to_string())
        } else {
            WeatherError::RequestFailed(e.to_string())
        }
    }

    /// Parse a local wall-clock timestamp and convert it to UTC
    fn parse_local_datetime(s: &str, offset: FixedOffset) -> Result<DateTime<Utc>, WeatherError> {
        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"));

        if let Ok(naive) = naive {
            return naive
                .and_local_timezone(offset)
                .single()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| WeatherError::ParseError(format!("Ambiguous local time: {s}")));
        }

        // Explicit offsets win over the response-level offset
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }

        Err(WeatherError::ParseError(format!(
            "Invalid datetime format: {s}"
        )))
    }

    /// Validate a raw response and convert it to a [`SnowForecast`]
    ///
    /// Hourly records with a null snowfall, wind speed or wind direction are
    /// dropped and counted. Anything structurally wrong is a parse error.
    fn parse_snow_forecast(api: ApiResponse) -> Result<SnowForecast, WeatherError> {
        let offset = FixedOffset::east_opt(api.utc_offset_seconds).ok_or_else(|| {
            WeatherError::ParseError(format!(
                "Invalid UTC offset: {}s",
                api.utc_offset_seconds
            ))
        })?;

        let current_data = api.current.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;
        let hourly_data = api.hourly.ok_or_else(|| {
            WeatherError::ParseError("No hourly data in response".to_string())
        })?;

        let len = hourly_data.time.len();
        if len == 0 {
            return Err(WeatherError::ParseError(
                "Hourly data is empty".to_string(),
            ));
        }
        let lengths_match = hourly_data.snowfall.len() == len
            && hourly_data.wind_speed_10m.len() == len
            && hourly_data.wind_direction_10m.len() == len
            && (hourly_data.temperature_2m.is_empty() || hourly_data.temperature_2m.len() == len);
        if !lengths_match {
            return Err(WeatherError::ParseError(format!(
                "Hourly arrays have mismatched lengths (time: {len}, snowfall: {}, wind_speed_10m: {}, wind_direction_10m: {})",
                hourly_data.snowfall.len(),
                hourly_data.wind_speed_10m.len(),
                hourly_data.wind_direction_10m.len()
            )));
        }

        let times = hourly_data
            .time
            .iter()
            .map(|t| Self::parse_local_datetime(t, offset))
            .collect::<Result<Vec<_>, _>>()?;

        let mut hourly = Vec::with_capacity(len);
        let mut dropped_hours = 0;
        for (i, time) in times.iter().enumerate() {
            let values = (
                hourly_data.snowfall[i],
                hourly_data.wind_speed_10m[i],
                hourly_data.wind_direction_10m[i],
            );
            if let (Some(snowfall_in), Some(wind_speed_mph), Some(wind_direction_deg)) = values {
                hourly.push(HourlyConditions {
                    time: *time,
                    snowfall_in,
                    wind_speed_mph,
                    wind_direction_deg,
                    temperature_f: hourly_data.temperature_2m.get(i).copied().flatten(),
                });
            } else {
                dropped_hours += 1;
                debug!(time = %time, "Dropping hourly record with missing values");
            }
        }

        let current_time = Self::parse_local_datetime(&current_data.time, offset)?;
        let (first, last) = times
            .iter()
            .min()
            .zip(times.iter().max())
            .ok_or_else(|| WeatherError::ParseError("Hourly data is empty".to_string()))?;
        if current_time < *first || current_time > *last + Duration::hours(1) {
            return Err(WeatherError::ParseError(format!(
                "Current time {current_time} lies outside hourly range {first} - {last}"
            )));
        }

        let current = CurrentConditions {
            time: current_time,
            temperature_f: current_data.temperature_2m,
            snowfall_in: current_data.snowfall.unwrap_or(0.0),
            wind_speed_mph: current_data.wind_speed_10m.ok_or_else(|| {
                WeatherError::ParseError("Current wind speed missing".to_string())
            })?,
            wind_direction_deg: current_data.wind_direction_10m.ok_or_else(|| {
                WeatherError::ParseError("Current wind direction missing".to_string())
            })?,
        };

        Ok(SnowForecast {
            latitude: api.latitude,
            longitude: api.longitude,
            timezone: api.timezone,
            utc_offset_seconds: api.utc_offset_seconds,
            current,
            hourly,
            dropped_hours,
        })
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_snow_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<SnowForecast, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.forecast_url();
        debug!(url = %url, "Fetching snow forecast");

        let response = self
            .client
            .get(&url)
            .query(&self.forecast_query(latitude, longitude))
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                WeatherError::Timeout(self.config.timeout_secs)
            } else {
                WeatherError::ParseError(e.to_string())
            }
        })?;

        let forecast = Self::parse_snow_forecast(api_response)?;
        debug!(
            hours = forecast.hourly.len(),
            dropped = forecast.dropped_hours,
            timezone = %forecast.timezone,
            "Parsed snow forecast"
        );

        Ok(forecast)
    }
}
