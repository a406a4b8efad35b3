//! reqwest-backed implementation of the [`Transport`] port.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::ports::{Transport, TransportRequest, TransportResponse};

/// HTTP transport backed by a pooled reqwest client.
///
/// The underlying client sets no timeout of its own: per-attempt deadlines
/// are enforced by the dispatcher, which drops the in-flight future when an
/// attempt's budget elapses.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Build a transport with connection pooling and Nagle disabled.
    pub fn new() -> ApiResult<Self> {
        let http = Client::builder()
            .pool_max_idle_per_host(10)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> ApiResult<TransportResponse> {
        let mut builder = self.http.request(request.method.clone(), &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_builds() {
        assert!(HttpTransport::new().is_ok());
    }
}
