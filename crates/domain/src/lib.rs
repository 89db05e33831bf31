//! Domain layer for the snowblower advisor
//!
//! Contains the weather window model, advisory value objects, wind math and
//! domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
