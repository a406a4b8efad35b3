//! Uniform response envelope shared by every dispatch call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The request completed and `data` carries the payload.
    Success,
    /// The request failed; `message` describes why.
    Error,
}

/// The uniform result of every platform request.
///
/// Success envelopes are decoded from the wire as-is; error envelopes are
/// synthesized locally when the attempt loop gives up. Downstream callers
/// destructure this four-field shape directly, so the wire names (`data`,
/// `status`, `message`, `timestamp`) are stable.
///
/// Invariant: exactly one of {`data` present, `status == Error`} holds, and
/// `timestamp` is always set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Decoded payload, typed per call site; absent on failure.
    #[serde(default)]
    pub data: Option<T>,

    /// Whether the request succeeded.
    pub status: Outcome,

    /// Human-readable failure description; present only on error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// When this envelope was created (RFC 3339).
    pub timestamp: DateTime<Utc>,
}

impl<T> Envelope<T> {
    /// Wrap a payload in a success envelope stamped with the current time.
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            status: Outcome::Success,
            message: None,
            timestamp: Utc::now(),
        }
    }

    /// Build an error envelope carrying a failure description.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            status: Outcome::Error,
            message: Some(message.into()),
            timestamp: Utc::now(),
        }
    }

    /// True when the request succeeded.
    pub fn is_success(&self) -> bool {
        self.status == Outcome::Success
    }

    /// True when the request failed.
    pub fn is_error(&self) -> bool {
        self.status == Outcome::Error
    }

    /// Consume the envelope, yielding the payload if there is one.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_invariant() {
        let envelope = Envelope::success(42);
        assert!(envelope.is_success());
        assert_eq!(envelope.data, Some(42));
        assert!(envelope.message.is_none());
    }

    #[test]
    fn test_error_envelope_invariant() {
        let envelope: Envelope<()> = Envelope::error("connection refused");
        assert!(envelope.is_error());
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_wire_field_names() {
        let envelope = Envelope::success(json!({"id": "p1"}));
        let wire = serde_json::to_value(&envelope).unwrap();
        assert_eq!(wire["status"], "success");
        assert_eq!(wire["data"]["id"], "p1");
        assert!(wire.get("message").is_none());
        assert!(wire.get("timestamp").is_some());
    }

    #[test]
    fn test_deserialize_success_from_wire() {
        let wire = r#"{
            "data": {"projects": []},
            "status": "success",
            "timestamp": "2025-06-01T12:00:00.000Z"
        }"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(wire).unwrap();
        assert!(envelope.is_success());
        assert!(envelope.data.is_some());
        assert!(envelope.message.is_none());
    }

    #[test]
    fn test_deserialize_error_with_null_data() {
        let wire = r#"{
            "data": null,
            "status": "error",
            "message": "upstream unavailable",
            "timestamp": "2025-06-01T12:00:00.000Z"
        }"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(wire).unwrap();
        assert!(envelope.is_error());
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("upstream unavailable"));
    }
}
