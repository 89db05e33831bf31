//! Snowblowing recommendation entity
//!
//! A recommendation is computed per request from a [`WeatherWindow`] and the
//! configured [`Thresholds`]; it is never stored.
//!
//! [`WeatherWindow`]: super::WeatherWindow

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{CompassPoint, Thresholds};

/// Calm winds upper bound (mph)
const CALM_WIND_MPH: f64 = 10.0;
/// Light winds upper bound (mph)
const LIGHT_WIND_MPH: f64 = 15.0;
/// Above this (mph) winds are dangerous regardless of threshold
const DANGEROUS_WIND_MPH: f64 = 35.0;

/// What the user should do right now, in decreasing severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionVerdict {
    /// Threshold met and wind is safe
    ActNow,
    /// Threshold met but wind is too strong
    WaitForWind,
    /// Below threshold now, forecast pushes it over
    ForecastAlert,
    /// Nothing to do
    NoAction,
}

impl ActionVerdict {
    /// Pick the verdict; the first matching rule wins
    #[must_use]
    pub const fn decide(past_exceeds: bool, wind_safe: bool, projected_exceeds: bool) -> Self {
        match (past_exceeds, wind_safe, projected_exceeds) {
            (true, true, _) => Self::ActNow,
            (true, false, _) => Self::WaitForWind,
            (false, _, true) => Self::ForecastAlert,
            (false, _, false) => Self::NoAction,
        }
    }

    /// Headline for this verdict
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ActNow => "TIME TO SNOW BLOW NOW!",
            Self::WaitForWind => "WAIT - CONDITIONS NOT IDEAL",
            Self::ForecastAlert => "FORECAST ALERT",
            Self::NoAction => "NO NEED TO SNOW BLOW NOW",
        }
    }

    /// Severity color name (red, orange, yellow, green)
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::ActNow => "red",
            Self::WaitForWind => "orange",
            Self::ForecastAlert => "yellow",
            Self::NoAction => "green",
        }
    }

    /// Icon shown next to the title
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::ActNow => "🚨",
            Self::WaitForWind | Self::ForecastAlert => "⚠️",
            Self::NoAction => "✅",
        }
    }

    /// Stable identifier, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ActNow => "ACT_NOW",
            Self::WaitForWind => "WAIT_FOR_WIND",
            Self::ForecastAlert => "FORECAST_ALERT",
            Self::NoAction => "NO_ACTION",
        }
    }
}

impl fmt::Display for ActionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-facing description of a wind speed
///
/// Safety is decided by the configured maximum alone; the tiers only pick
/// the wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindCondition {
    Excellent,
    Good,
    Fair,
    TooWindy,
    Dangerous,
}

impl WindCondition {
    /// Classify a wind speed against the thresholds
    #[must_use]
    pub fn classify(wind_speed_mph: f64, thresholds: &Thresholds) -> Self {
        if thresholds.is_wind_safe(wind_speed_mph) {
            if wind_speed_mph <= CALM_WIND_MPH {
                Self::Excellent
            } else if wind_speed_mph <= LIGHT_WIND_MPH {
                Self::Good
            } else {
                Self::Fair
            }
        } else if wind_speed_mph <= DANGEROUS_WIND_MPH {
            Self::TooWindy
        } else {
            Self::Dangerous
        }
    }

    /// Whether this condition allows snowblowing
    #[must_use]
    pub const fn is_safe(self) -> bool {
        matches!(self, Self::Excellent | Self::Good | Self::Fair)
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent - calm conditions",
            Self::Good => "Good - light winds",
            Self::Fair => "Fair - moderate winds, exercise caution",
            Self::TooWindy => "Too windy - snow will blow back, wait for calmer conditions",
            Self::Dangerous => "Dangerous - high winds, do not snowblow",
        }
    }
}

impl fmt::Display for WindCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Note attached to the forecast peak wind
#[must_use]
pub const fn forecast_wind_note(peak_wind_safe: bool) -> &'static str {
    if peak_wind_safe {
        "Forecast wind conditions look favorable"
    } else {
        "Peak winds may be too strong later, consider snowblowing preemptively"
    }
}

/// Summed snowfall over a window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Accumulation {
    /// Total snowfall in inches
    pub inches: f64,
    /// Number of hourly samples summed
    pub sample_count: usize,
}

/// Conditions at request time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Air temperature in °F, when reported
    pub temperature_f: Option<f64>,
    pub wind_speed_mph: f64,
    /// Bearing the wind blows from
    pub wind_direction_deg: f64,
    pub wind_from: CompassPoint,
    pub wind_safe: bool,
    pub wind_condition: WindCondition,
}

/// Summary of the next 24 hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastOutlook {
    pub accumulation: Accumulation,
    /// Highest forecast wind speed (0 when there is no forecast)
    pub peak_wind_mph: f64,
    pub peak_wind_safe: bool,
    pub safety_note: String,
    /// Circular mean of forecast wind bearings
    pub avg_wind_direction_deg: Option<f64>,
    pub wind_from: Option<CompassPoint>,
    pub blow_to: Option<CompassPoint>,
    /// Past plus forecast accumulation reaches the threshold
    pub will_exceed_threshold: bool,
    /// Forecast hour index at which the threshold is reached, if below it now
    pub hours_until_threshold: Option<usize>,
}

/// The advisory result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub verdict: ActionVerdict,
    /// Snowfall over the past 24 hours
    pub past_accumulation: Accumulation,
    pub current: CurrentConditions,
    pub forecast: ForecastOutlook,
    /// Where to throw snow: downwind of the current wind
    pub blow_to: CompassPoint,
    /// Inches still missing before the threshold is met (never negative)
    pub remaining_inches: f64,
    /// Thresholds the recommendation was computed against
    pub thresholds: Thresholds,
    /// Either window held fewer than 24 hourly samples
    pub insufficient_data: bool,
}

impl Recommendation {
    /// Whether the user should go out now, wind permitting
    #[must_use]
    pub const fn threshold_met(&self) -> bool {
        matches!(
            self.verdict,
            ActionVerdict::ActNow | ActionVerdict::WaitForWind
        )
    }
}
