//! Port traits decoupling the dispatch core from concrete transports.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::domain::errors::ApiResult;

/// A fully prepared outgoing request: resolved locator, headers, JSON body.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute resource locator.
    pub url: String,
    /// Headers in insertion order; later entries may repeat names.
    pub headers: Vec<(String, String)>,
    /// JSON body, if the method carries one.
    pub body: Option<Value>,
}

/// Raw response from the transport: status plus the undecoded body text.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code, success or not.
    pub status: StatusCode,
    /// Body text as received; decoding happens in the dispatcher.
    pub body: String,
}

/// Port for executing a single HTTP exchange.
///
/// The dispatcher depends on this trait, not on a concrete HTTP stack, so
/// tests can inject counting or scripted doubles and the retry/caching logic
/// stays transport-agnostic.
///
/// Implementations must be `Send + Sync`; methods take `&self` so one
/// transport serves concurrent dispatches.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one exchange.
    ///
    /// Returns `Ok` for ANY status code the server produced; `Err` is
    /// reserved for failures below HTTP (connect, DNS, I/O). Status
    /// classification is the dispatcher's job.
    async fn execute(&self, request: TransportRequest) -> ApiResult<TransportResponse>;
}
