//! Wire models for the platform API, grouped by façade.

pub mod chat;
pub mod companion;
pub mod config;
pub mod crm;
pub mod projects;
pub mod user;

pub use config::{ApiConfig, CacheConfig, Config, LoggingConfig, RetryConfig};
