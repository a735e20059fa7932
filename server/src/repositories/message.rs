//! MessageRepository - Repository for direct messages

use super::{Create, Read};
use crate::dtos::CreateMessageDTO;
use crate::entities::Message;
use chrono::{DateTime, Utc};
use sqlx::{Error, SqlitePool};
use tracing::{info, instrument};

pub struct MessageRepository {
    connection_pool: SqlitePool,
}

impl MessageRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Get paginated messages of a conversation
    ///
    /// Supports both:
    /// - Loading recent messages (when `before_date` is None): gets the most recent `limit` messages
    /// - Loading older messages (when `before_date` is Some): gets `limit` messages before that date
    ///
    /// # Returns
    /// Messages ordered from newest to oldest, limited to `limit` count
    #[instrument(skip(self), fields(conversation_id = %conversation_id))]
    pub async fn find_many_paginated(
        &self,
        conversation_id: &i64,
        before_date: Option<&DateTime<Utc>>,
        limit: i64,
    ) -> Result<Vec<Message>, Error> {
        if let Some(before) = before_date {
            sqlx::query_as::<_, Message>(
                r#"
                SELECT * FROM messages
                WHERE conversation_id = ? AND created_at < ?
                ORDER BY created_at DESC, message_id DESC
                LIMIT ?
                "#,
            )
            .bind(conversation_id)
            .bind(before)
            .bind(limit)
            .fetch_all(&self.connection_pool)
            .await
        } else {
            sqlx::query_as::<_, Message>(
                r#"
                SELECT * FROM messages
                WHERE conversation_id = ?
                ORDER BY created_at DESC, message_id DESC
                LIMIT ?
                "#,
            )
            .bind(conversation_id)
            .bind(limit)
            .fetch_all(&self.connection_pool)
            .await
        }
    }

    /// Unread messages addressed to a user, newest first
    pub async fn find_unread_for_recipient(&self, recipient_id: &i64) -> Result<Vec<Message>, Error> {
        sqlx::query_as::<_, Message>(
            r#"
            SELECT * FROM messages
            WHERE recipient_id = ? AND read = 0
            ORDER BY created_at DESC, message_id DESC
            "#,
        )
        .bind(recipient_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    pub async fn mark_read(&self, message_id: &i64) -> Result<Message, Error> {
        sqlx::query_as::<_, Message>(
            "UPDATE messages SET read = 1, updated_at = ? WHERE message_id = ? RETURNING *",
        )
        .bind(Utc::now())
        .bind(message_id)
        .fetch_optional(&self.connection_pool)
        .await?
        .ok_or(Error::RowNotFound)
    }
}

impl Create<Message, CreateMessageDTO> for MessageRepository {
    /// Stores the message and makes it the conversation's last message, atomically.
    /// `last_message_id` only moves forward, so concurrent senders cannot roll it back.
    #[instrument(skip(self, data), fields(conversation_id = %data.conversation_id, sender_id = %data.sender_id))]
    async fn create(&self, data: &CreateMessageDTO) -> Result<Message, Error> {
        let now = Utc::now();
        let mut tx = self.connection_pool.begin().await?;

        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (conversation_id, sender_id, recipient_id, content, priority, read, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, 0, ?, ?)
            RETURNING *
            "#,
        )
        .bind(data.conversation_id)
        .bind(data.sender_id)
        .bind(data.recipient_id)
        .bind(&data.content)
        .bind(data.priority)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE conversations SET last_message_id = ?1, updated_at = ?2
            WHERE conversation_id = ?3 AND (last_message_id IS NULL OR last_message_id < ?1)
            "#,
        )
        .bind(message.message_id)
        .bind(message.created_at)
        .bind(message.conversation_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Message created with id {}", message.message_id);
        Ok(message)
    }
}

impl Read<Message, i64> for MessageRepository {
    async fn read(&self, id: &i64) -> Result<Option<Message>, Error> {
        sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE message_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
