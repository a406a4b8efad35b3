//! Error taxonomy for platform API requests.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while executing a platform API request.
///
/// These never cross the dispatcher boundary: every variant ends up as the
/// `message` of an error envelope. The taxonomy exists so the retry loop can
/// distinguish failures worth retrying from credential rejections.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid or missing credentials (HTTP 401)
    #[error("Authentication failed - credentials rejected")]
    Unauthorized,

    /// Permission denied (HTTP 403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Any other non-success HTTP status
    #[error("HTTP {0}: {1}")]
    Status(StatusCode, String),

    /// Attempt exceeded its timeout budget
    #[error("Request timed out")]
    Timeout,

    /// Connection, DNS, or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("Malformed response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success HTTP status into an error variant.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden(body),
            _ => Self::Status(status, body),
        }
    }

    /// Returns true if this error is transient and the dispatcher may retry.
    ///
    /// Non-auth status failures are retried by default, a deliberate
    /// availability-over-strictness choice for this API.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Status(_, _) | Self::Timeout | Self::Network(_) | Self::Decode(_)
        )
    }

    /// Returns true if retrying cannot succeed and the attempt loop must stop.
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result alias for transport and dispatch internals.
pub type ApiResult<T> = Result<T, ApiError>;
