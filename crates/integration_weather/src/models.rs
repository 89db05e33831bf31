//! Weather data models
//!
//! Raw Open-Meteo response types plus the validated forecast handed to
//! callers. All timestamps in the validated types are UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conditions at request time, in imperial units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Observation time (UTC)
    pub time: DateTime<Utc>,
    /// Air temperature in °F
    pub temperature_f: Option<f64>,
    /// Snowfall in the preceding interval, inches
    pub snowfall_in: f64,
    /// Wind speed at 10 m in mph
    pub wind_speed_mph: f64,
    /// Wind direction at 10 m, degrees the wind comes from
    pub wind_direction_deg: f64,
}

/// One complete hourly record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyConditions {
    /// End of the hour (UTC)
    pub time: DateTime<Utc>,
    /// Snowfall during the hour, inches
    pub snowfall_in: f64,
    /// Wind speed in mph
    pub wind_speed_mph: f64,
    /// Wind direction in degrees
    pub wind_direction_deg: f64,
    /// Air temperature in °F
    pub temperature_f: Option<f64>,
}

/// Validated snow forecast for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnowForecast {
    /// Grid-cell latitude used by the API
    pub latitude: f64,
    /// Grid-cell longitude used by the API
    pub longitude: f64,
    /// IANA timezone of the location
    pub timezone: String,
    /// Offset of the location's local time from UTC
    pub utc_offset_seconds: i32,
    /// Current conditions
    pub current: CurrentConditions,
    /// Complete hourly records, oldest first
    pub hourly: Vec<HourlyConditions>,
    /// Hourly records dropped because a value was null
    pub dropped_hours: usize,
}

/// Raw current block from API
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentData {
    pub time: String,
    #[serde(default)]
    pub temperature_2m: Option<f64>,
    #[serde(default)]
    pub snowfall: Option<f64>,
    #[serde(default)]
    pub wind_speed_10m: Option<f64>,
    #[serde(default)]
    pub wind_direction_10m: Option<f64>,
}

/// Raw hourly block from API (parallel arrays indexed by `time`)
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    pub snowfall: Vec<Option<f64>>,
    pub wind_speed_10m: Vec<Option<f64>>,
    pub wind_direction_10m: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
}

/// Raw API response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub utc_offset_seconds: i32,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    pub current: Option<CurrentData>,
    pub hourly: Option<HourlyData>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_with_nulls_deserializes() {
        let json = r#"{
            "latitude": 46.78,
            "longitude": -96.9,
            "utc_offset_seconds": -21600,
            "timezone": "America/Chicago",
            "current": {
                "time": "2025-01-10T12:15",
                "temperature_2m": 14.2,
                "snowfall": 0.0,
                "wind_speed_10m": 8.1,
                "wind_direction_10m": 290
            },
            "hourly": {
                "time": ["2025-01-10T11:00", "2025-01-10T12:00"],
                "snowfall": [0.1, null],
                "wind_speed_10m": [7.5, 8.0],
                "wind_direction_10m": [285, 290],
                "temperature_2m": [13.9, 14.1]
            }
        }"#;

        let response: ApiResponse = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(response.utc_offset_seconds, -21600);
        assert_eq!(response.timezone, "America/Chicago");

        let hourly = response.hourly.expect("hourly present");
        assert_eq!(hourly.time.len(), 2);
        assert_eq!(hourly.snowfall, vec![Some(0.1), None]);

        let current = response.current.expect("current present");
        assert_eq!(current.wind_direction_10m, Some(290.0));
    }

    #[test]
    fn test_api_response_defaults() {
        let json = r#"{"latitude": 0.0, "longitude": 0.0}"#;
        let response: ApiResponse = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(response.utc_offset_seconds, 0);
        assert_eq!(response.timezone, "UTC");
        assert!(response.current.is_none());
        assert!(response.hourly.is_none());
    }

    #[test]
    fn test_hourly_without_temperature() {
        let json = r#"{
            "time": ["2025-01-10T11:00"],
            "snowfall": [0.0],
            "wind_speed_10m": [3.0],
            "wind_direction_10m": [180]
        }"#;
        let hourly: HourlyData = serde_json::from_str(json).expect("should deserialize");
        assert!(hourly.temperature_2m.is_empty());
    }
}
