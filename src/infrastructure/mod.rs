//! Infrastructure layer module
//!
//! Concrete implementations behind the domain ports:
//! - HTTP dispatch core (reqwest transport, retry, cache, dispatcher)
//! - Configuration management (figment)
//! - Logging setup (tracing)

pub mod config;
pub mod http;
pub mod logging;
