//! Invariant errors - Rules an entity enforces on itself, independent of storage

use super::enums::BookingStatus;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("a conversation needs exactly 2 participants, got {0}")]
    ParticipantCount(usize),

    #[error("a conversation cannot have user {0} on both sides")]
    SelfConversation(i64),

    #[error("users cannot send messages to themselves")]
    SelfMessage,

    #[error("booking cannot move from {from} to {to}")]
    IllegalTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
}
