//! Hourly weather samples and the 24h past/next window around "now"

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::circular_mean;

/// Number of hourly samples in a complete past or next window
pub const WINDOW_HOURS: usize = 24;

/// One hour of weather at the advisory location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyWeatherSample {
    /// End of the hour this sample covers (UTC)
    pub time: DateTime<Utc>,
    /// Snowfall during the hour in inches
    pub snowfall_in: f64,
    /// Wind speed in mph
    pub wind_speed_mph: f64,
    /// Direction the wind blows from, degrees clockwise from north
    pub wind_direction_deg: f64,
}

/// Current conditions plus the trailing and upcoming 24 hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherWindow {
    /// Conditions at the time of the request
    pub current: HourlyWeatherSample,
    /// Current air temperature in °F, when reported
    pub temperature_f: Option<f64>,
    /// Hours ending at now, oldest first
    pub past: Vec<HourlyWeatherSample>,
    /// Hours after now, oldest first
    pub next: Vec<HourlyWeatherSample>,
    /// IANA timezone of the location as reported by the weather source
    pub timezone: String,
}

impl WeatherWindow {
    /// Split a chronological hourly series around `now`
    ///
    /// The anchor is the last sample at or before `now`. Hourly snowfall is
    /// the amount that fell during the hour ending at the sample time, so the
    /// anchor belongs to the past window. `past` holds samples in
    /// `(anchor - 24h, anchor]`, `next` holds samples in
    /// `(anchor, anchor + 24h]`. Without an anchor `past` is empty and `next`
    /// covers `(now, now + 24h]`. Gaps in the series show up as shorter
    /// windows.
    #[must_use]
    pub fn partition(
        current: HourlyWeatherSample,
        temperature_f: Option<f64>,
        mut hourly: Vec<HourlyWeatherSample>,
        now: DateTime<Utc>,
        timezone: impl Into<String>,
    ) -> Self {
        hourly.sort_by_key(|s| s.time);
        let span = Duration::hours(WINDOW_HOURS as i64);

        let anchor = hourly.iter().rev().find(|s| s.time <= now).map(|s| s.time);

        let past = anchor.map_or_else(Vec::new, |anchor| {
            hourly
                .iter()
                .filter(|s| s.time > anchor - span && s.time <= anchor)
                .copied()
                .collect()
        });

        let base = anchor.unwrap_or(now);
        let next = hourly
            .iter()
            .filter(|s| s.time > base && s.time <= base + span)
            .copied()
            .collect();

        Self {
            current,
            temperature_f,
            past,
            next,
            timezone: timezone.into(),
        }
    }

    /// Whether both windows hold a full day of samples
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.past.len() >= WINDOW_HOURS && self.next.len() >= WINDOW_HOURS
    }
}

/// Sum of snowfall over the samples, in inches
#[must_use]
pub fn total_snowfall(samples: &[HourlyWeatherSample]) -> f64 {
    samples.iter().map(|s| s.snowfall_in).sum()
}

/// Highest wind speed over the samples, 0 when empty
#[must_use]
pub fn peak_wind_speed(samples: &[HourlyWeatherSample]) -> f64 {
    samples
        .iter()
        .map(|s| s.wind_speed_mph)
        .fold(0.0, f64::max)
}

/// Equal-weight circular mean of the samples' wind directions
#[must_use]
pub fn mean_wind_direction(samples: &[HourlyWeatherSample]) -> Option<f64> {
    circular_mean(samples.iter().map(|s| s.wind_direction_deg))
}
