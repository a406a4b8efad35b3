//! Retry policy with exponential backoff for platform API requests.

use std::time::Duration;

use crate::domain::errors::ApiError;

/// Retry policy: attempt budget plus backoff schedule.
///
/// Backoff doubles per attempt from the initial delay: 1s, 2s, 4s, ...
/// capped at the configured maximum. Credential rejections (401/403) are
/// never retried; everything else is, while attempts remain.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum retries after the initial try (total tries = this + 1).
    pub max_retries: u32,
    /// Initial backoff duration in milliseconds.
    pub initial_backoff_ms: u64,
    /// Maximum backoff duration in milliseconds.
    pub max_backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 1_000,
            max_backoff_ms: 60_000,
        }
    }
}

impl RetryPolicy {
    /// Create a retry policy with custom settings.
    pub const fn new(max_retries: u32, initial_backoff_ms: u64, max_backoff_ms: u64) -> Self {
        Self {
            max_retries,
            initial_backoff_ms,
            max_backoff_ms,
        }
    }

    /// Backoff to wait after the 0-indexed `attempt` fails.
    ///
    /// Formula: `min(initial * 2^attempt, max)`.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let backoff_ms = self
            .initial_backoff_ms
            .saturating_mul(2_u64.saturating_pow(attempt))
            .min(self.max_backoff_ms);

        Duration::from_millis(backoff_ms)
    }

    /// Whether a failed attempt should be retried.
    ///
    /// True only while attempts remain AND the error is transient.
    pub fn should_retry(&self, error: &ApiError, attempt: u32) -> bool {
        if attempt >= self.max_retries {
            return false;
        }

        error.is_transient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_backoff_doubles_from_one_second() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.backoff_delay(0), Duration::from_millis(1_000));
        assert_eq!(policy.backoff_delay(1), Duration::from_millis(2_000));
        assert_eq!(policy.backoff_delay(2), Duration::from_millis(4_000));
        assert_eq!(policy.backoff_delay(3), Duration::from_millis(8_000));
    }

    #[test]
    fn test_backoff_caps_at_max() {
        let policy = RetryPolicy::new(10, 1_000, 60_000);

        assert_eq!(policy.backoff_delay(5), Duration::from_millis(32_000));
        assert_eq!(policy.backoff_delay(6), Duration::from_millis(60_000));
        assert_eq!(policy.backoff_delay(20), Duration::from_millis(60_000));
    }

    #[test]
    fn test_should_retry_transient_errors() {
        let policy = RetryPolicy::new(3, 1_000, 60_000);

        assert!(policy.should_retry(&ApiError::Timeout, 0));
        assert!(policy.should_retry(&ApiError::Network("reset".to_string()), 1));
        assert!(policy.should_retry(
            &ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()),
            2
        ));
        assert!(policy.should_retry(&ApiError::Decode("truncated".to_string()), 0));
    }

    #[test]
    fn test_should_not_retry_credential_rejections() {
        let policy = RetryPolicy::new(3, 1_000, 60_000);

        assert!(!policy.should_retry(&ApiError::Unauthorized, 0));
        assert!(!policy.should_retry(&ApiError::Forbidden("denied".to_string()), 0));
    }

    #[test]
    fn test_should_not_retry_after_budget_exhausted() {
        let policy = RetryPolicy::new(3, 1_000, 60_000);

        assert!(!policy.should_retry(&ApiError::Timeout, 3));
        assert!(!policy.should_retry(&ApiError::Timeout, 4));
    }
}
