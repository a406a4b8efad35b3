//! Chat and assistant wire models.
//!
//! These structs map to the platform's conversational endpoints. Wire names
//! are camelCase; they are decoded out of the envelope's `data` field.

use serde::{Deserialize, Serialize};

/// Assistant reply to a sent message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    /// Generated assistant response text.
    pub response: String,
    /// Conversation this reply belongs to (created on first message).
    pub conversation_id: String,
    /// Tokens consumed answering this message.
    pub tokens_used: u64,
}

/// One conversation in the history listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    /// Conversation identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Most recent message text.
    pub last_message: String,
    /// ISO 8601 timestamp of the last activity.
    pub updated_at: String,
    /// Number of messages exchanged.
    pub message_count: u64,
}

/// Payload of the conversation-history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationList {
    /// Conversations, most recently updated first.
    pub conversations: Vec<ConversationSummary>,
}

/// An assistant model available to this account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Model identifier used when sending messages.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Short capability description.
    pub description: String,
    /// Throughput budget for this model.
    pub tokens_per_minute: u64,
    /// Feature tags (e.g. "vision", "tools").
    pub features: Vec<String>,
}

/// Payload of the model-catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCatalog {
    /// Models the account may select.
    pub models: Vec<ModelInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_reply_deserialization() {
        let json = r#"{
            "response": "Here is your summary.",
            "conversationId": "conv-42",
            "tokensUsed": 187
        }"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        assert_eq!(reply.conversation_id, "conv-42");
        assert_eq!(reply.tokens_used, 187);
    }

    #[test]
    fn test_conversation_list_deserialization() {
        let json = r#"{
            "conversations": [
                {
                    "id": "conv-1",
                    "title": "Q3 planning",
                    "lastMessage": "Sounds good",
                    "updatedAt": "2025-05-20T09:00:00Z",
                    "messageCount": 12
                }
            ]
        }"#;
        let list: ConversationList = serde_json::from_str(json).unwrap();
        assert_eq!(list.conversations.len(), 1);
        assert_eq!(list.conversations[0].message_count, 12);
    }
}
