//! Logging initialization
//!
//! Sets up the `tracing` subscriber for the binary. Output goes to stderr so
//! command output on stdout stays machine readable.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_tracing};
