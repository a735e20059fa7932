//! Message entity - Direct message between two users, always filed under their conversation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const MAX_CONTENT_LENGTH: u64 = 1000;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Message {
    pub message_id: i64,
    pub conversation_id: i64,
    pub sender_id: i64,
    pub recipient_id: i64,
    pub content: String,
    pub priority: bool,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
