//! Advisory service
//!
//! Entry points behind the `advice` and `config` commands.

use std::sync::Arc;

use domain::{Location, Recommendation, Thresholds};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::AdvisoryEngine;
use crate::error::ApplicationError;
use crate::ports::WeatherPort;

/// Immutable settings the service is built with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorSettings {
    /// Point the advisory reports on
    pub location: Location,
    /// Accumulation and wind limits
    pub thresholds: Thresholds,
}

impl AdvisorSettings {
    /// Snapshot of the location and thresholds, without any weather access
    pub fn config_snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            location: self.location.clone(),
            thresholds: self.thresholds,
        }
    }
}

/// Active configuration as reported by the `config` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub location: Location,
    pub thresholds: Thresholds,
}

/// Fetches weather and evaluates it into a recommendation
pub struct AdvisoryService {
    settings: AdvisorSettings,
    engine: AdvisoryEngine,
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for AdvisoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisoryService")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl AdvisoryService {
    /// Create a new advisory service
    pub fn new(settings: AdvisorSettings, weather: Arc<dyn WeatherPort>) -> Self {
        let engine = AdvisoryEngine::new(settings.thresholds);
        Self {
            settings,
            engine,
            weather,
        }
    }

    /// Fetch the weather window and evaluate it
    ///
    /// Fetch failures are returned unchanged; the engine itself never fails.
    #[instrument(skip(self), fields(location = %self.settings.location.display_name()))]
    pub async fn get_advisory(&self) -> Result<Recommendation, ApplicationError> {
        let window = match self.weather.fetch_window(&self.settings.location).await {
            Ok(window) => window,
            Err(e) => {
                warn!(error = %e, "Weather fetch failed");
                return Err(e);
            },
        };

        debug!(
            past_samples = window.past.len(),
            next_samples = window.next.len(),
            timezone = %window.timezone,
            "Evaluating weather window"
        );

        let recommendation = self.engine.evaluate(&window);

        if recommendation.insufficient_data {
            warn!(
                past_samples = recommendation.past_accumulation.sample_count,
                next_samples = recommendation.forecast.accumulation.sample_count,
                "Weather window is incomplete"
            );
        }

        info!(
            verdict = %recommendation.verdict,
            past_inches = recommendation.past_accumulation.inches,
            forecast_inches = recommendation.forecast.accumulation.inches,
            wind_mph = recommendation.current.wind_speed_mph,
            "Advisory computed"
        );

        Ok(recommendation)
    }

    /// Snapshot of the active location and thresholds
    pub fn get_config(&self) -> ConfigSnapshot {
        self.settings.config_snapshot()
    }
}
