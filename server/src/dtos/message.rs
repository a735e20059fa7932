//! Message DTOs - Data Transfer Objects for messages

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /messages`; the sender is the authenticated user
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct SendMessageDTO {
    pub recipient_id: i64,

    #[validate(length(min = 1, max = 1000, message = "Message content must be between 1 and 1000 characters"))]
    pub content: String,

    #[serde(default)]
    pub priority: bool,
}

/// DTO for creating a new message (without message_id)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateMessageDTO {
    pub conversation_id: i64,
    pub sender_id: i64,
    pub recipient_id: i64,
    pub content: String,
    pub priority: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_length_is_bounded() {
        let mut dto: SendMessageDTO =
            serde_json::from_str(r#"{"recipient_id": 2, "content": "hi"}"#).unwrap();
        assert!(!dto.priority);
        assert!(dto.validate().is_ok());

        dto.content = "a".repeat(1000);
        assert!(dto.validate().is_ok());

        dto.content = "a".repeat(1001);
        assert!(dto.validate().is_err());

        dto.content = String::new();
        assert!(dto.validate().is_err());
    }
}
