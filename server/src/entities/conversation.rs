//! Conversation entity - Private thread between exactly two users
//!
//! The pair of participants is a value type: the only way to build one is through
//! [`ParticipantPair::new`] or [`ParticipantPair::from_slice`], which sort the ids and
//! reject anything that is not two distinct users. Rows coming back from the database
//! go through the same constructor, so a malformed row surfaces as a decode error.

use super::error::InvariantError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticipantPair {
    low: i64,
    high: i64,
}

impl ParticipantPair {
    pub fn new(a: i64, b: i64) -> Result<Self, InvariantError> {
        if a == b {
            return Err(InvariantError::SelfConversation(a));
        }
        Ok(Self {
            low: a.min(b),
            high: a.max(b),
        })
    }

    pub fn from_slice(ids: &[i64]) -> Result<Self, InvariantError> {
        match ids {
            [a, b] => Self::new(*a, *b),
            _ => Err(InvariantError::ParticipantCount(ids.len())),
        }
    }

    pub fn first(&self) -> i64 {
        self.low
    }

    pub fn second(&self) -> i64 {
        self.high
    }

    pub fn as_array(&self) -> [i64; 2] {
        [self.low, self.high]
    }

    pub fn contains(&self, user_id: i64) -> bool {
        self.low == user_id || self.high == user_id
    }

    /// The participant that is not `user_id`, if `user_id` is part of the pair
    pub fn other(&self, user_id: i64) -> Option<i64> {
        if user_id == self.low {
            Some(self.high)
        } else if user_id == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

impl Serialize for ParticipantPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_array().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ParticipantPair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Vec::<i64>::deserialize(deserializer)?;
        Self::from_slice(&ids).map_err(serde::de::Error::custom)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Conversation {
    pub conversation_id: i64,
    pub participants: ParticipantPair,
    pub last_message_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, SqliteRow> for Conversation {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let low: i64 = row.try_get("participant_low")?;
        let high: i64 = row.try_get("participant_high")?;
        let participants =
            ParticipantPair::new(low, high).map_err(|e| sqlx::Error::ColumnDecode {
                index: "participant_low".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            conversation_id: row.try_get("conversation_id")?,
            participants,
            last_message_id: row.try_get("last_message_id")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
