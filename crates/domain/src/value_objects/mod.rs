//! Value Objects - Immutable, identity-less domain primitives

mod compass;
mod geo_location;
mod thresholds;

pub use compass::{CompassPoint, circular_mean, downwind_bearing, normalize_degrees};
pub use geo_location::{GeoLocation, Location};
pub use thresholds::Thresholds;
