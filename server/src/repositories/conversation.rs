//! ConversationRepository - Repository for two-party conversations

use super::Read;
use crate::entities::{Conversation, ParticipantPair};
use chrono::Utc;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

pub struct ConversationRepository {
    connection_pool: SqlitePool,
}

impl ConversationRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Returns the conversation between the two participants, creating it if needed.
    /// The boolean is true when this call created it.
    ///
    /// The insert is a no-op when the pair already exists (unique index on the sorted pair),
    /// so two concurrent callers always end up reading the same row.
    #[instrument(skip(self), fields(first = %participants.first(), second = %participants.second()))]
    pub async fn find_or_create(
        &self,
        participants: &ParticipantPair,
    ) -> Result<(Conversation, bool), Error> {
        let now = Utc::now();
        let inserted = sqlx::query(
            r#"
            INSERT INTO conversations (participant_low, participant_high, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (participant_low, participant_high) DO NOTHING
            "#,
        )
        .bind(participants.first())
        .bind(participants.second())
        .bind(now)
        .bind(now)
        .execute(&self.connection_pool)
        .await?
        .rows_affected()
            > 0;

        let conversation = sqlx::query_as::<_, Conversation>(
            "SELECT * FROM conversations WHERE participant_low = ? AND participant_high = ?",
        )
        .bind(participants.first())
        .bind(participants.second())
        .fetch_one(&self.connection_pool)
        .await?;

        if inserted {
            info!("Conversation created with id {}", conversation.conversation_id);
        } else {
            debug!("Conversation already existed");
        }
        Ok((conversation, inserted))
    }

    /// Conversations the user takes part in, most recently active first
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn find_many_by_user_id(&self, user_id: &i64) -> Result<Vec<Conversation>, Error> {
        sqlx::query_as::<_, Conversation>(
            r#"
            SELECT * FROM conversations
            WHERE participant_low = ?1 OR participant_high = ?1
            ORDER BY updated_at DESC, conversation_id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.connection_pool)
        .await
    }
}

impl Read<Conversation, i64> for ConversationRepository {
    async fn read(&self, id: &i64) -> Result<Option<Conversation>, Error> {
        sqlx::query_as::<_, Conversation>("SELECT * FROM conversations WHERE conversation_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
