//! Weather adapter - Implements WeatherPort using integration_weather

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{ClockPort, WeatherPort};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{HourlyWeatherSample, Location, WeatherWindow};
use integration_weather::{
    HourlyConditions, OpenMeteoClient, SnowForecast, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument, warn};

use super::SystemClock;

/// Adapter for weather data using the Open-Meteo API
///
/// Partitions the fetched hourly series around the injected clock's "now".
pub struct WeatherAdapter {
    client: OpenMeteoClient,
    clock: Arc<dyn ClockPort>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenMeteoClient")
            .field("base_url", &self.client.config().base_url)
            .finish_non_exhaustive()
    }
}

impl WeatherAdapter {
    /// Create an adapter using the host clock
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an adapter with an explicit clock
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_clock(
        config: WeatherConfig,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config)
            .map_err(|e| ApplicationError::InvalidConfiguration(e.to_string()))?;
        Ok(Self { client, clock })
    }

    /// Map integration weather error to application error
    ///
    /// Every fetch failure is reported as unavailable data.
    fn map_error(err: WeatherError) -> ApplicationError {
        ApplicationError::DataUnavailable(err.to_string())
    }

    const fn map_hour(hour: &HourlyConditions) -> HourlyWeatherSample {
        HourlyWeatherSample {
            time: hour.time,
            snowfall_in: hour.snowfall_in,
            wind_speed_mph: hour.wind_speed_mph,
            wind_direction_deg: hour.wind_direction_deg,
        }
    }

    /// Convert a validated forecast into a window around `now`
    fn to_window(forecast: SnowForecast, now: DateTime<Utc>) -> WeatherWindow {
        let current = HourlyWeatherSample {
            time: forecast.current.time,
            snowfall_in: forecast.current.snowfall_in,
            wind_speed_mph: forecast.current.wind_speed_mph,
            wind_direction_deg: forecast.current.wind_direction_deg,
        };
        let hourly = forecast.hourly.iter().map(Self::map_hour).collect();

        WeatherWindow::partition(
            current,
            forecast.current.temperature_f,
            hourly,
            now,
            forecast.timezone,
        )
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self, location), fields(location = %location.display_name()))]
    async fn fetch_window(&self, location: &Location) -> Result<WeatherWindow, ApplicationError> {
        let coordinates = location.coordinates();
        let forecast = self
            .client
            .get_snow_forecast(coordinates.latitude(), coordinates.longitude())
            .await
            .map_err(Self::map_error)?;

        if forecast.dropped_hours > 0 {
            warn!(
                dropped = forecast.dropped_hours,
                "Hourly records with missing values were skipped"
            );
        }

        let now = self.clock.now();
        let window = Self::to_window(forecast, now);
        debug!(
            now = %now,
            past = window.past.len(),
            next = window.next.len(),
            "Partitioned weather window"
        );

        Ok(window)
    }
}
