//! CRM webhook wire models.
//!
//! The CRM integration speaks through a single webhook endpoint that
//! multiplexes on an `action` field. Aggregate stats come back with
//! snake_case section keys inside a camelCase envelope payload, matching
//! the upstream webhook contract exactly.

use serde::{Deserialize, Serialize};

/// Aggregated CRM dashboard statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmStats {
    /// Contact counters.
    pub contacts: ContactStats,
    /// Sales pipeline counters.
    pub opportunities: OpportunityStats,
    /// Campaign counters.
    pub campaigns: CampaignStats,
    /// Conversation counters.
    pub conversations: ConversationStats,
    /// Revenue figures.
    pub revenue: RevenueStats,
    /// ISO 8601 timestamp of the last upstream sync.
    pub last_sync: String,
    /// Connection state of the CRM integration.
    pub status: CrmSyncStatus,
}

/// Contact counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactStats {
    /// All contacts on file.
    pub total: u64,
    /// Contacts created today.
    pub new_today: u64,
    /// Contacts marked qualified.
    pub qualified: u64,
}

/// Sales pipeline counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityStats {
    /// Open opportunities.
    pub total: u64,
    /// Combined pipeline value.
    pub value: f64,
    /// Fraction of opportunities won.
    pub won_rate: f64,
}

/// Campaign counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignStats {
    /// Currently running campaigns.
    pub active: u64,
    /// Messages sent today.
    pub sent_today: u64,
    /// Open rate across active campaigns.
    pub open_rate: f64,
}

/// Conversation counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationStats {
    /// All tracked conversations.
    pub total: u64,
    /// Conversations awaiting a reply.
    pub active: u64,
    /// Fraction answered within the SLA window.
    pub response_rate: f64,
}

/// Revenue figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueStats {
    /// Revenue booked this month.
    pub monthly: f64,
    /// Open pipeline value.
    pub pipeline: f64,
    /// Month-over-month growth.
    pub growth: f64,
}

/// Connection state of the CRM integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrmSyncStatus {
    /// Webhook reachable, data current.
    Connected,
    /// A sync is in flight.
    Syncing,
    /// Last sync failed.
    Error,
}

/// Request payload for creating a CRM contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Primary email address.
    pub email: String,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Tags applied on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Request payload for launching a campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRequest {
    /// Campaign name.
    pub name: String,
    /// Campaign kind (e.g. "email", "sms").
    #[serde(rename = "type")]
    pub campaign_type: String,
    /// Audience segments to target.
    pub audience_ids: Vec<String>,
    /// ISO 8601 send time; immediate when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}
