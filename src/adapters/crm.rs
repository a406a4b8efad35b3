//! CRM webhook endpoints.
//!
//! The CRM integration is reached through one webhook path that multiplexes
//! on an `action` field in the POST body.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::domain::envelope::Envelope;
use crate::domain::models::crm::{CampaignRequest, CrmStats, NewContact};
use crate::infrastructure::http::{Dispatcher, RequestOptions};

/// Webhook path the CRM upstream listens on.
const WEBHOOK_PATH: &str = "/ghl-webhook";

/// Client surface for the CRM integration.
#[derive(Clone)]
pub struct CrmApi {
    dispatcher: Arc<Dispatcher>,
}

impl CrmApi {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch the aggregated CRM dashboard statistics.
    ///
    /// The upstream only answers POST, so the cache request is declined by
    /// the dispatcher (caching is GET-only); the flag is kept to mirror the
    /// caller contract.
    pub async fn stats(&self) -> Envelope<CrmStats> {
        let body = json!({ "action": "get_stats" });

        self.dispatcher
            .dispatch(WEBHOOK_PATH, RequestOptions::post(body).cached())
            .await
    }

    /// Trigger an immediate sync with the CRM upstream.
    pub async fn force_sync(&self) -> Envelope<Value> {
        let body = json!({ "action": "force_sync" });

        self.dispatcher
            .dispatch(WEBHOOK_PATH, RequestOptions::post(body))
            .await
    }

    /// Create a contact in the CRM.
    pub async fn create_contact(&self, contact: &NewContact) -> Envelope<Value> {
        let body = json!({
            "action": "create_contact",
            "data": contact,
        });

        self.dispatcher
            .dispatch(WEBHOOK_PATH, RequestOptions::post(body))
            .await
    }

    /// Launch a campaign against the given audience segments.
    pub async fn launch_campaign(&self, campaign: &CampaignRequest) -> Envelope<Value> {
        let body = json!({
            "action": "launch_campaign",
            "data": campaign,
        });

        self.dispatcher
            .dispatch(WEBHOOK_PATH, RequestOptions::post(body))
            .await
    }
}
