//! Request dispatch with bounded retries, per-attempt timeouts, and read
//! caching.
//!
//! The dispatcher executes one logical request per call: resolve the
//! locator, consult the cache (cacheable reads only), then run the attempt
//! loop — each try with its own timeout budget, exponential backoff between
//! tries, credential rejections terminal on first occurrence. Every outcome,
//! success or failure, is normalized into an [`Envelope`]; no error ever
//! crosses the caller boundary.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::envelope::Envelope;
use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::ports::{Transport, TransportRequest};

use super::cache::{ResponseCache, DEFAULT_CACHE_TTL};
use super::retry::RetryPolicy;

/// Default per-attempt timeout (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fallback message when the attempt loop ends without a recorded error.
const GENERIC_FAILURE: &str = "Network request failed";

/// Per-call options for [`Dispatcher::dispatch`].
///
/// Construct via the method shorthands and chain overrides:
///
/// ```ignore
/// RequestOptions::get().cached().with_timeout(Duration::from_secs(5))
/// ```
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method.
    pub method: Method,
    /// JSON request body.
    pub body: Option<Value>,
    /// Extra headers appended after the dispatcher defaults.
    pub headers: Vec<(String, String)>,
    /// Per-attempt timeout override.
    pub timeout: Option<Duration>,
    /// Retry budget override (total tries = retries + 1).
    pub retries: Option<u32>,
    /// Consult and populate the response cache. Honored for GET only;
    /// mutating methods never touch the cache even with this set.
    pub cache: bool,
    /// Cache validity override.
    pub cache_ttl: Option<Duration>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl RequestOptions {
    /// A plain GET request.
    pub fn get() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
            timeout: None,
            retries: None,
            cache: false,
            cache_ttl: None,
        }
    }

    /// A POST request carrying a JSON body.
    pub fn post(body: Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::get()
        }
    }

    /// A PATCH request carrying a JSON body.
    pub fn patch(body: Value) -> Self {
        Self {
            method: Method::PATCH,
            body: Some(body),
            ..Self::get()
        }
    }

    /// A DELETE request.
    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            ..Self::get()
        }
    }

    /// Request cache participation (effective for GET only).
    pub fn cached(mut self) -> Self {
        self.cache = true;
        self
    }

    /// Override the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the retry budget.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Override the cache validity window.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Append a header to this request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Executes logical requests against the platform API.
///
/// Owns the locator resolution, the attempt loop, and the cache handshake.
/// The transport is injected behind the [`Transport`] port and the cache is
/// an explicitly constructed dependency, so tests assemble their own pair.
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    base_url: String,
    auth_token: Option<String>,
    default_timeout: Duration,
    retry_policy: RetryPolicy,
    cache: Arc<ResponseCache>,
    default_cache_ttl: Duration,
}

impl Dispatcher {
    /// Create a dispatcher with default timeout, retry, and TTL settings.
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: impl Into<String>,
        cache: Arc<ResponseCache>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            auth_token: None,
            default_timeout: DEFAULT_TIMEOUT,
            retry_policy: RetryPolicy::default(),
            cache,
            default_cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Replace the retry policy.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Replace the default per-attempt timeout.
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Replace the default cache validity window.
    pub fn with_default_cache_ttl(mut self, ttl: Duration) -> Self {
        self.default_cache_ttl = ttl;
        self
    }

    /// Attach a bearer token sent with every request.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// The cache this dispatcher reads and writes.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Execute one logical request and normalize the outcome.
    ///
    /// Always resolves to an envelope: unreachable hosts, malformed bodies
    /// and exhausted retries all surface as error envelopes, never as a
    /// returned `Err` or panic.
    pub async fn dispatch<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Envelope<T> {
        let url = self.resolve_url(path);
        let request_id = Uuid::new_v4();
        let cacheable = options.cache && options.method == Method::GET;

        if cacheable {
            if let Some(hit) = self.cache.get(&url) {
                if let Ok(envelope) = serde_json::from_value::<Envelope<T>>(hit) {
                    debug!(%request_id, %url, "response cache hit");
                    return envelope;
                }
                // Stored shape no longer matches this call site; refetch.
            }
        }

        let retries = options.retries.unwrap_or(self.retry_policy.max_retries);
        let attempt_timeout = options.timeout.unwrap_or(self.default_timeout);
        let mut last_error: Option<ApiError> = None;

        for attempt in 0..=retries {
            match self
                .attempt_once::<T>(&url, &options, attempt_timeout, cacheable)
                .await
            {
                Ok(envelope) => {
                    if attempt > 0 {
                        debug!(%request_id, attempt, "request succeeded after retries");
                    }
                    return envelope;
                }
                Err(err) => {
                    let terminal = err.is_permanent();
                    warn!(
                        %request_id,
                        %url,
                        attempt,
                        error = %err,
                        "request attempt failed"
                    );
                    last_error = Some(err);
                    if terminal {
                        break;
                    }
                }
            }

            if attempt < retries {
                let delay = self.retry_policy.backoff_delay(attempt);
                debug!(
                    %request_id,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "backing off before retry"
                );
                sleep(delay).await;
            }
        }

        let message =
            last_error.map_or_else(|| GENERIC_FAILURE.to_string(), |err| err.to_string());
        Envelope::error(message)
    }

    /// One try: send, enforce the attempt timeout, classify the status,
    /// decode, and populate the cache on cacheable success.
    async fn attempt_once<T: DeserializeOwned>(
        &self,
        url: &str,
        options: &RequestOptions,
        attempt_timeout: Duration,
        cacheable: bool,
    ) -> ApiResult<Envelope<T>> {
        let request = self.build_request(url, options);

        // Dropping the future on timeout aborts the in-flight exchange, so
        // an expired attempt never leaks a pending operation.
        let response = match timeout(attempt_timeout, self.transport.execute(request)).await {
            Ok(result) => result?,
            Err(_) => return Err(ApiError::Timeout),
        };

        if !response.status.is_success() {
            return Err(ApiError::from_status(response.status, response.body));
        }

        let raw: Value = serde_json::from_str(&response.body)?;
        let envelope: Envelope<T> = serde_json::from_value(raw.clone())?;

        if cacheable {
            let ttl = options.cache_ttl.unwrap_or(self.default_cache_ttl);
            self.cache.set(url, raw, ttl);
        }

        Ok(envelope)
    }

    /// Resolve the absolute resource locator for `path`.
    ///
    /// Locators that already carry a scheme pass through verbatim; bare
    /// paths are joined to the configured base.
    fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    fn build_request(&self, url: &str, options: &RequestOptions) -> TransportRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = &self.auth_token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        headers.extend(options.headers.iter().cloned());

        TransportRequest {
            method: options.method.clone(),
            url: url.to_string(),
            headers,
            body: options.body.clone(),
        }
    }
}
