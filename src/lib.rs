//! Atrium - Workspace Platform API Client
//!
//! Typed async client for the Atrium workspace platform: chat assistant,
//! CRM webhook, project board, AI companion, and user analytics endpoints,
//! all funnelled through one dispatch core with bounded retries,
//! per-attempt timeouts, and a TTL cache for repeated reads.
//!
//! Every call resolves to an [`Envelope`]: failures are values carried in
//! the envelope's `status`/`message` fields, never errors or panics
//! crossing the caller boundary.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): envelope, error taxonomy, wire models,
//!   and the transport port
//! - **Infrastructure Layer** (`infrastructure`): reqwest transport, retry
//!   policy, response cache, dispatcher, configuration, logging
//! - **Adapters** (`adapters`): the five typed façades over the dispatcher
//!
//! # Example
//!
//! ```ignore
//! use atrium::{Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Client::new(Config::default())?;
//!
//!     let reply = client.chat().send_message("Summarize my week", None).await;
//!     if reply.is_success() {
//!         println!("{}", reply.data.unwrap().response);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod client;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::{ChatApi, CompanionApi, CrmApi, ProjectsApi, UserApi};
pub use client::Client;
pub use domain::envelope::{Envelope, Outcome};
pub use domain::errors::{ApiError, ApiResult};
pub use domain::models::config::{ApiConfig, CacheConfig, Config, LoggingConfig, RetryConfig};
pub use domain::ports::{Transport, TransportRequest, TransportResponse};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::http::{
    Dispatcher, HttpTransport, RequestOptions, ResponseCache, RetryPolicy,
};
