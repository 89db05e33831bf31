//! Domain entities - weather windows and the recommendations derived from them

mod recommendation;
mod weather_window;

pub use recommendation::{
    Accumulation, ActionVerdict, CurrentConditions, ForecastOutlook, Recommendation,
    WindCondition, forecast_wind_note,
};
pub use weather_window::{
    HourlyWeatherSample, WINDOW_HOURS, WeatherWindow, mean_wind_direction, peak_wind_speed,
    total_snowfall,
};
