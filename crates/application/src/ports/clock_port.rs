//! Clock port

use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;

/// Source of the current instant
///
/// Injected wherever "now" matters so that window partitioning can be
/// tested against a fixed time.
#[cfg_attr(test, automock)]
pub trait ClockPort: Send + Sync {
    /// Current UTC instant
    fn now(&self) -> DateTime<Utc>;
}
