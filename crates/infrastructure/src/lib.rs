//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and provides
//! configuration loading and logging setup for the binary.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AdvisorConfig, AppConfig, ConfigLoadError, LocationConfig};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_tracing};
