//! Compass points and wind direction math
//!
//! Wind directions follow the meteorological convention: the bearing is the
//! direction the wind blows *from*, in degrees clockwise from north.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resultant vectors shorter than this have no meaningful mean direction
const MIN_RESULTANT_LENGTH: f64 = 1e-9;

/// One of the eight principal compass points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassPoint {
    /// North (0°)
    N,
    /// Northeast (45°)
    NE,
    /// East (90°)
    E,
    /// Southeast (135°)
    SE,
    /// South (180°)
    S,
    /// Southwest (225°)
    SW,
    /// West (270°)
    W,
    /// Northwest (315°)
    NW,
}

impl CompassPoint {
    /// All points in clockwise order starting at north
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Round a bearing to the nearest point using 45° sectors centered on
    /// each point (N covers [337.5°, 22.5°))
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        let normalized = normalize_degrees(degrees);
        let index = ((normalized + 22.5) / 45.0).floor() as usize % 8;
        Self::ALL[index]
    }

    /// Center bearing of this point in degrees
    #[must_use]
    pub const fn degrees(self) -> f64 {
        match self {
            Self::N => 0.0,
            Self::NE => 45.0,
            Self::E => 90.0,
            Self::SE => 135.0,
            Self::S => 180.0,
            Self::SW => 225.0,
            Self::W => 270.0,
            Self::NW => 315.0,
        }
    }

    /// The point 180° away
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::NE => Self::SW,
            Self::E => Self::W,
            Self::SE => Self::NW,
            Self::S => Self::N,
            Self::SW => Self::NE,
            Self::W => Self::E,
            Self::NW => Self::SE,
        }
    }

    /// Abbreviated label ("N", "NE", ...)
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Map any finite bearing into [0, 360)
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Direction the wind blows *toward*, given the direction it comes from
#[must_use]
pub fn downwind_bearing(from_degrees: f64) -> f64 {
    normalize_degrees(from_degrees + 180.0)
}

/// Equal-weight circular mean of bearings, via unit-vector averaging
///
/// Returns `None` for an empty input or when the bearings cancel out
/// (e.g. 0° and 180°). The result is normalized to [0, 360).
#[must_use]
pub fn circular_mean<I>(bearings: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (mut sin_sum, mut cos_sum, mut count) = (0.0_f64, 0.0_f64, 0_usize);
    for bearing in bearings {
        let radians = bearing.to_radians();
        sin_sum += radians.sin();
        cos_sum += radians.cos();
        count += 1;
    }
    if count == 0 {
        return None;
    }

    let n = count as f64;
    let (mean_sin, mean_cos) = (sin_sum / n, cos_sum / n);
    if mean_sin.hypot(mean_cos) < MIN_RESULTANT_LENGTH {
        return None;
    }

    let mean = normalize_degrees(mean_sin.atan2(mean_cos).to_degrees());
    // snap values like 359.9999999999 back to north
    if (360.0 - mean) < 1e-9 { Some(0.0) } else { Some(mean) }
}
