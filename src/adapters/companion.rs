//! AI companion endpoints.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::domain::envelope::Envelope;
use crate::domain::models::companion::{CompanionStatus, InsightKind, InsightReport, TrainingData};
use crate::infrastructure::http::{Dispatcher, RequestOptions};

/// Client surface for the AI companion.
#[derive(Clone)]
pub struct CompanionApi {
    dispatcher: Arc<Dispatcher>,
}

impl CompanionApi {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch the companion's profile, mood, and current suggestions (cached).
    pub async fn status(&self) -> Envelope<CompanionStatus> {
        self.dispatcher
            .dispatch("/companion/status", RequestOptions::get().cached())
            .await
    }

    /// Submit preferences and rated interactions for training.
    pub async fn train(&self, data: &TrainingData) -> Envelope<Value> {
        self.dispatcher
            .dispatch("/companion/train", RequestOptions::post(json!(data)))
            .await
    }

    /// Fetch derived insights for the given category (cached).
    pub async fn insights(&self, kind: InsightKind) -> Envelope<InsightReport> {
        let path = format!("/companion/insights?type={}", kind.as_str());

        self.dispatcher
            .dispatch(&path, RequestOptions::get().cached())
            .await
    }
}
