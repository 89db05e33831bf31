//! Integration tests for the weather client using wiremock
//!
//! These tests verify the weather client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Hourly local timestamps for `count` hours starting 2025-01-09T00:00
fn hourly_times(count: usize) -> Vec<String> {
    (0..count)
        .map(|h| format!("2025-01-{:02}T{:02}:00", 9 + h / 24, h % 24))
        .collect()
}

/// Sample Open-Meteo response: 72 hours in Chicago time (UTC-6)
fn sample_snow_response() -> serde_json::Value {
    let times = hourly_times(72);
    let snowfall: Vec<f64> = (0..72).map(|h| if h < 24 { 0.0 } else { 0.1 }).collect();

    serde_json::json!({
        "latitude": 46.78,
        "longitude": -96.895,
        "generationtime_ms": 0.08,
        "utc_offset_seconds": -21600,
        "timezone": "America/Chicago",
        "timezone_abbreviation": "CST",
        "elevation": 278.0,
        "current_units": {
            "time": "iso8601",
            "interval": "seconds",
            "temperature_2m": "°F",
            "snowfall": "inch",
            "wind_speed_10m": "mp/h",
            "wind_direction_10m": "°"
        },
        "current": {
            "time": "2025-01-10T12:15",
            "interval": 900,
            "temperature_2m": 18.4,
            "snowfall": 0.0,
            "wind_speed_10m": 11.2,
            "wind_direction_10m": 315
        },
        "hourly_units": {
            "time": "iso8601",
            "snowfall": "inch",
            "wind_speed_10m": "mp/h",
            "wind_direction_10m": "°",
            "temperature_2m": "°F"
        },
        "hourly": {
            "time": times,
            "snowfall": snowfall,
            "wind_speed_10m": vec![9.5; 72],
            "wind_direction_10m": vec![300; 72],
            "temperature_2m": vec![17.0; 72]
        }
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenMeteoClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    OpenMeteoClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the /forecast endpoint with the given response
async fn setup_forecast_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_get_snow_forecast_success() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_snow_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_snow_forecast(46.78, -96.895).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let forecast = result.unwrap();
    assert_eq!(forecast.timezone, "America/Chicago");
    assert_eq!(forecast.utc_offset_seconds, -21600);
    assert_eq!(forecast.hourly.len(), 72);
    assert_eq!(forecast.dropped_hours, 0);
    assert!((forecast.current.wind_speed_mph - 11.2).abs() < 1e-9);
    assert!((forecast.current.wind_direction_deg - 315.0).abs() < 1e-9);
    assert_eq!(forecast.current.temperature_f, Some(18.4));
}

#[tokio::test]
async fn test_timestamps_converted_to_utc() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_snow_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let forecast = client.get_snow_forecast(46.78, -96.895).await.unwrap();

    // local midnight in UTC-6 is 06:00 UTC
    assert_eq!(
        forecast.hourly[0].time,
        Utc.with_ymd_and_hms(2025, 1, 9, 6, 0, 0).unwrap()
    );
    assert_eq!(
        forecast.current.time,
        Utc.with_ymd_and_hms(2025, 1, 10, 18, 15, 0).unwrap()
    );
}

#[tokio::test]
async fn test_null_hours_are_dropped() {
    let mock_server = MockServer::start().await;

    let mut body = sample_snow_response();
    body["hourly"]["snowfall"][30] = serde_json::Value::Null;
    body["hourly"]["wind_speed_10m"][31] = serde_json::Value::Null;

    setup_forecast_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let forecast = client.get_snow_forecast(46.78, -96.895).await.unwrap();

    assert_eq!(forecast.hourly.len(), 70);
    assert_eq!(forecast.dropped_hours, 2);
}

// ============================================================================
// Error scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(&mock_server, ResponseTemplate::new(503)).await;

    let client = create_test_client(&mock_server);
    let result = client.get_snow_forecast(46.78, -96.895).await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(&mock_server, ResponseTemplate::new(429)).await;

    let client = create_test_client(&mock_server);
    let result = client.get_snow_forecast(46.78, -96.895).await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_client_error_returns_request_failed() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": true,
            "reason": "Cannot initialize WeatherVariable from invalid String value"
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_snow_forecast(46.78, -96.895).await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_snow_forecast(46.78, -96.895).await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_missing_hourly_block() {
    let mock_server = MockServer::start().await;

    let mut body = sample_snow_response();
    body.as_object_mut().unwrap().remove("hourly");

    setup_forecast_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let result = client.get_snow_forecast(46.78, -96.895).await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(sample_snow_response())
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let config = WeatherConfig {
        base_url: mock_server.uri(),
        timeout_secs: 1,
        ..Default::default()
    };
    let client = OpenMeteoClient::new(config).unwrap();
    let result = client.get_snow_forecast(46.78, -96.895).await;

    assert!(
        matches!(result, Err(WeatherError::Timeout(1))),
        "Expected Timeout, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unreachable_server() {
    let config = WeatherConfig {
        // port 9 (discard) is closed on test hosts
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..Default::default()
    };
    let client = OpenMeteoClient::new(config).unwrap();
    let result = client.get_snow_forecast(46.78, -96.895).await;

    assert!(
        matches!(
            result,
            Err(WeatherError::ConnectionFailed(_) | WeatherError::RequestFailed(_))
        ),
        "Expected connection failure, got: {result:?}"
    );
}

// ============================================================================
// Validation scenarios
// ============================================================================

#[tokio::test]
async fn test_invalid_coordinates_latitude() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let result = client.get_snow_forecast(91.0, 0.0).await;
    assert!(
        matches!(result, Err(WeatherError::InvalidCoordinates)),
        "Expected InvalidCoordinates, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_coordinates_longitude() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let result = client.get_snow_forecast(0.0, -181.0).await;
    assert!(
        matches!(result, Err(WeatherError::InvalidCoordinates)),
        "Expected InvalidCoordinates, got: {result:?}"
    );
}

// ============================================================================
// Request verification
// ============================================================================

#[tokio::test]
async fn test_request_contains_correct_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "46.78"))
        .and(query_param("longitude", "-96.895"))
        .and(query_param("hourly", "snowfall,wind_speed_10m,wind_direction_10m,temperature_2m"))
        .and(query_param("temperature_unit", "fahrenheit"))
        .and(query_param("wind_speed_unit", "mph"))
        .and(query_param("precipitation_unit", "inch"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_snow_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_snow_forecast(46.78, -96.895).await;

    assert!(result.is_ok(), "Request should match expected query params");
}

#[tokio::test]
async fn test_past_and_forecast_days_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("past_days", "1"))
        .and(query_param("forecast_days", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_snow_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_snow_forecast(46.78, -96.895).await;

    assert!(result.is_ok(), "Request should include past_days and forecast_days");
}
