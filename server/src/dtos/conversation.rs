//! Conversation DTOs - Data Transfer Objects for conversations

use crate::entities::Conversation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ConversationDTO {
    pub conversation_id: i64,
    /// Always two ids, ascending
    pub participants: [i64; 2],
    pub last_message_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Conversation> for ConversationDTO {
    fn from(value: Conversation) -> Self {
        Self {
            conversation_id: value.conversation_id,
            participants: value.participants.as_array(),
            last_message_id: value.last_message_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Body of `POST /conversations`: the other participant
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StartConversationDTO {
    pub participant_id: i64,
}
