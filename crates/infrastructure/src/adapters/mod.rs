//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod clock;
mod weather_adapter;

pub use clock::{FixedClock, SystemClock};
pub use weather_adapter::WeatherAdapter;
