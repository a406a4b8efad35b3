//! User profile and analytics wire models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Subscription plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Free tier.
    Free,
    /// Unlimited messaging tier.
    Unlimited,
    /// Professional tier.
    Pro,
    /// Enterprise agreement.
    Enterprise,
}

/// Usage counters against plan limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageCounters {
    /// Tokens consumed this cycle.
    pub tokens_used: u64,
    /// Token budget for the cycle.
    pub tokens_limit: u64,
    /// API calls this cycle.
    pub api_calls: u64,
    /// Storage consumed, in bytes.
    pub storage_used: u64,
}

/// A platform user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// Account identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Subscription tier.
    pub plan: PlanTier,
    /// Arbitrary preference document.
    pub preferences: serde_json::Map<String, Value>,
    /// Usage counters.
    pub usage: UsageCounters,
}

/// Payload of the profile endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// The account on whose behalf requests are made.
    pub user: UserAccount,
}

/// Reporting window for the analytics endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    /// Last 24 hours.
    #[serde(rename = "24h")]
    Day,
    /// Last 7 days.
    #[default]
    #[serde(rename = "7d")]
    Week,
    /// Last 30 days.
    #[serde(rename = "30d")]
    Month,
    /// Last 90 days.
    #[serde(rename = "90d")]
    Quarter,
}

impl Timeframe {
    /// Wire value used in the `timeframe` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "24h",
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
        }
    }
}

/// One point on a metric trend line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    /// ISO 8601 date of the sample.
    pub date: String,
    /// Sample value.
    pub value: f64,
    /// Metric the sample belongs to.
    pub metric: String,
}

/// Usage analytics over the requested window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// Chat sessions held.
    pub chat_sessions: u64,
    /// Tokens consumed.
    pub tokens_used: u64,
    /// Projects created.
    pub projects_created: u64,
    /// Tasks completed.
    pub tasks_completed: u64,
    /// Composite productivity score.
    pub productivity_score: f64,
    /// Per-metric trend lines.
    pub trends: Vec<TrendPoint>,
}

/// Payload of the analytics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// The requested window's summary.
    pub analytics: AnalyticsSummary,
}
