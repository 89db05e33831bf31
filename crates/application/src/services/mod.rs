//! Application services - Use case implementations

mod advisory_engine;
mod advisory_service;

pub use advisory_engine::AdvisoryEngine;
pub use advisory_service::{AdvisorSettings, AdvisoryService, ConfigSnapshot};
