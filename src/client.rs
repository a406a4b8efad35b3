//! Client assembly: configuration to ready-to-use façades.

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::{ChatApi, CompanionApi, CrmApi, ProjectsApi, UserApi};
use crate::domain::errors::ApiResult;
use crate::domain::models::config::Config;
use crate::domain::ports::Transport;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::http::{Dispatcher, HttpTransport, ResponseCache, RetryPolicy};

/// Entry point for the platform API.
///
/// Owns the transport, the process-wide response cache, and the dispatcher
/// shared by every façade. The cache is dependency-injected into the
/// dispatcher, so tests that need isolation construct their own
/// [`Dispatcher`] instead of going through a `Client`.
pub struct Client {
    dispatcher: Arc<Dispatcher>,
    cache: Arc<ResponseCache>,
}

impl Client {
    /// Build a client from an explicit configuration.
    pub fn new(config: Config) -> ApiResult<Self> {
        let transport = Arc::new(HttpTransport::new()?);
        Ok(Self::with_transport(config, transport))
    }

    /// Build a client from the merged configuration sources
    /// (defaults, `.atrium/*.yaml`, `ATRIUM_*` environment variables).
    pub fn from_default_config() -> anyhow::Result<Self> {
        let config = ConfigLoader::load()?;
        Ok(Self::new(config)?)
    }

    /// Build a client over a custom transport. Useful for tests and for
    /// embedding applications that bring their own HTTP stack.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        let cache = Arc::new(ResponseCache::new());
        let retry_policy = RetryPolicy::new(
            config.retry.max_retries,
            config.retry.initial_backoff_ms,
            config.retry.max_backoff_ms,
        );

        let mut dispatcher = Dispatcher::new(transport, config.api.base_url, Arc::clone(&cache))
            .with_retry_policy(retry_policy)
            .with_default_timeout(Duration::from_millis(config.api.timeout_ms))
            .with_default_cache_ttl(Duration::from_millis(config.cache.default_ttl_ms));
        if let Some(token) = config.api.auth_token {
            dispatcher = dispatcher.with_auth_token(token);
        }

        Self {
            dispatcher: Arc::new(dispatcher),
            cache,
        }
    }

    /// Chat assistant endpoints.
    pub fn chat(&self) -> ChatApi {
        ChatApi::new(Arc::clone(&self.dispatcher))
    }

    /// CRM webhook endpoints.
    pub fn crm(&self) -> CrmApi {
        CrmApi::new(Arc::clone(&self.dispatcher))
    }

    /// Project board endpoints.
    pub fn projects(&self) -> ProjectsApi {
        ProjectsApi::new(Arc::clone(&self.dispatcher))
    }

    /// AI companion endpoints.
    pub fn companion(&self) -> CompanionApi {
        CompanionApi::new(Arc::clone(&self.dispatcher))
    }

    /// User profile and analytics endpoints.
    pub fn user(&self) -> UserApi {
        UserApi::new(Arc::clone(&self.dispatcher))
    }

    /// The dispatcher, for one-off calls outside the façades.
    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }

    /// Drop every cached response.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_from_default_config() {
        let client = Client::new(Config::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_clear_cache_empties_shared_store() {
        let client = Client::new(Config::default()).unwrap();
        client.dispatcher().cache().set(
            "http://localhost:3000/api/projects",
            serde_json::json!({"projects": []}),
            Duration::from_secs(60),
        );
        client.clear_cache();
        assert!(client.dispatcher().cache().is_empty());
    }
}
