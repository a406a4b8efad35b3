//! Chat and assistant endpoints.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Value};

use crate::domain::envelope::Envelope;
use crate::domain::models::chat::{ChatReply, ConversationList, ModelCatalog};
use crate::infrastructure::http::{Dispatcher, RequestOptions};

/// Conversations returned when no limit is given.
const DEFAULT_CONVERSATION_LIMIT: u32 = 20;

/// Client surface for the chat assistant.
#[derive(Clone)]
pub struct ChatApi {
    dispatcher: Arc<Dispatcher>,
}

impl ChatApi {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Send a message to the assistant, optionally continuing an existing
    /// conversation.
    pub async fn send_message(
        &self,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Envelope<ChatReply> {
        let mut body = json!({
            "message": message,
            "timestamp": Utc::now(),
        });
        if let Some(id) = conversation_id {
            body["conversationId"] = json!(id);
        }

        self.dispatcher.dispatch("/chat", RequestOptions::post(body)).await
    }

    /// Fetch conversation history, most recently updated first.
    ///
    /// Results are cached; pass `None` for the default page size.
    pub async fn conversations(&self, limit: Option<u32>) -> Envelope<ConversationList> {
        let limit = limit.unwrap_or(DEFAULT_CONVERSATION_LIMIT);
        let path = format!("/chat/conversations?limit={limit}");

        self.dispatcher
            .dispatch(&path, RequestOptions::get().cached())
            .await
    }

    /// Delete a conversation and its messages.
    pub async fn delete_conversation(&self, conversation_id: &str) -> Envelope<Value> {
        let path = format!("/chat/conversations/{conversation_id}");

        self.dispatcher.dispatch(&path, RequestOptions::delete()).await
    }

    /// List the assistant models available to this account (cached).
    pub async fn available_models(&self) -> Envelope<ModelCatalog> {
        self.dispatcher
            .dispatch("/chat/models", RequestOptions::get().cached())
            .await
    }
}
