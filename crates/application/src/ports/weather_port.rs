//! Weather data port
//!
//! Defines how the advisory obtains its weather window.

use async_trait::async_trait;
use domain::{Location, WeatherWindow};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching the hourly weather window around "now"
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current conditions plus the past and next 24 hours
    ///
    /// Implementations perform at most one network call and fail with
    /// [`ApplicationError::DataUnavailable`] on any transport or payload
    /// problem. Partial windows are returned as-is.
    async fn fetch_window(&self, location: &Location) -> Result<WeatherWindow, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
