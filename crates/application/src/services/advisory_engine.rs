//! Advisory engine
//!
//! Turns a weather window into a recommendation. Pure: no I/O and no clock.

use domain::{
    Accumulation, ActionVerdict, CompassPoint, CurrentConditions, ForecastOutlook,
    HourlyWeatherSample, Recommendation, Thresholds, WeatherWindow, WindCondition,
    downwind_bearing, forecast_wind_note, mean_wind_direction, peak_wind_speed, total_snowfall,
};

/// Evaluates weather windows against a fixed set of thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisoryEngine {
    thresholds: Thresholds,
}

impl AdvisoryEngine {
    /// Create an engine for the given thresholds
    #[must_use]
    pub const fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds this engine evaluates against
    #[must_use]
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Compute the recommendation for a window
    ///
    /// Never fails: empty windows sum to zero and leave the forecast
    /// direction undefined, and `insufficient_data` flags any window with
    /// fewer than 24 samples.
    #[must_use]
    pub fn evaluate(&self, window: &WeatherWindow) -> Recommendation {
        let thresholds = self.thresholds;

        let past = Accumulation {
            inches: total_snowfall(&window.past),
            sample_count: window.past.len(),
        };
        let current = self.current_conditions(window);
        let forecast = self.forecast_outlook(past.inches, &window.next);

        let verdict = ActionVerdict::decide(
            thresholds.is_exceeded_by(past.inches),
            current.wind_safe,
            forecast.will_exceed_threshold,
        );
        let blow_to = CompassPoint::from_degrees(downwind_bearing(current.wind_direction_deg));

        Recommendation {
            verdict,
            past_accumulation: past,
            current,
            forecast,
            blow_to,
            remaining_inches: thresholds.remaining(past.inches),
            thresholds,
            insufficient_data: !window.is_complete(),
        }
    }

    fn current_conditions(&self, window: &WeatherWindow) -> CurrentConditions {
        let wind_speed_mph = window.current.wind_speed_mph;
        let wind_direction_deg = window.current.wind_direction_deg;
        let wind_condition = WindCondition::classify(wind_speed_mph, &self.thresholds);

        CurrentConditions {
            temperature_f: window.temperature_f,
            wind_speed_mph,
            wind_direction_deg,
            wind_from: CompassPoint::from_degrees(wind_direction_deg),
            wind_safe: wind_condition.is_safe(),
            wind_condition,
        }
    }

    fn forecast_outlook(&self, past_inches: f64, next: &[HourlyWeatherSample]) -> ForecastOutlook {
        let accumulation = Accumulation {
            inches: total_snowfall(next),
            sample_count: next.len(),
        };
        let peak_wind_mph = peak_wind_speed(next);
        let peak_wind_safe = self.thresholds.is_wind_safe(peak_wind_mph);
        let avg_wind_direction_deg = mean_wind_direction(next);
        let wind_from = avg_wind_direction_deg.map(CompassPoint::from_degrees);

        ForecastOutlook {
            accumulation,
            peak_wind_mph,
            peak_wind_safe,
            safety_note: forecast_wind_note(peak_wind_safe).to_string(),
            avg_wind_direction_deg,
            wind_from,
            blow_to: wind_from.map(CompassPoint::opposite),
            will_exceed_threshold: self
                .thresholds
                .is_exceeded_by(past_inches + accumulation.inches),
            hours_until_threshold: self.hours_until_threshold(past_inches, next),
        }
    }

    /// Forecast hour index at which cumulative snowfall reaches the threshold
    fn hours_until_threshold(&self, past_inches: f64, next: &[HourlyWeatherSample]) -> Option<usize> {
        if self.thresholds.is_exceeded_by(past_inches) {
            return None;
        }
        next.iter()
            .scan(past_inches, |total, sample| {
                *total += sample.snowfall_in;
                Some(*total)
            })
            .position(|total| self.thresholds.is_exceeded_by(total))
    }
}
