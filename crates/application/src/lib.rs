//! Application layer - Use cases and orchestration
//!
//! Contains the advisory use cases and the ports they depend on. Adapters in
//! the infrastructure layer implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
