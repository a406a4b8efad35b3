//! User profile and analytics endpoints.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::domain::envelope::Envelope;
use crate::domain::models::user::{AnalyticsReport, Timeframe, UserProfile};
use crate::infrastructure::http::{Dispatcher, RequestOptions};

/// Client surface for account data.
#[derive(Clone)]
pub struct UserApi {
    dispatcher: Arc<Dispatcher>,
}

impl UserApi {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch the caller's profile and usage counters (cached).
    pub async fn profile(&self) -> Envelope<UserProfile> {
        self.dispatcher
            .dispatch("/user/profile", RequestOptions::get().cached())
            .await
    }

    /// Merge the given preference document into the caller's preferences.
    pub async fn update_preferences(
        &self,
        preferences: &serde_json::Map<String, Value>,
    ) -> Envelope<Value> {
        self.dispatcher
            .dispatch("/user/preferences", RequestOptions::patch(json!(preferences)))
            .await
    }

    /// Fetch usage analytics over the given window (cached).
    pub async fn analytics(&self, timeframe: Timeframe) -> Envelope<AnalyticsReport> {
        let path = format!("/user/analytics?timeframe={}", timeframe.as_str());

        self.dispatcher
            .dispatch(&path, RequestOptions::get().cached())
            .await
    }
}
