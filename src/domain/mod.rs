//! Domain layer for the Atrium platform client.
//!
//! Core value types (envelope, error taxonomy, wire models) and the port
//! traits the infrastructure layer implements.

pub mod envelope;
pub mod errors;
pub mod models;
pub mod ports;

// Re-export the types callers destructure on every response.
pub use envelope::{Envelope, Outcome};
pub use errors::{ApiError, ApiResult};
