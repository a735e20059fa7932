//! Integration tests for conversations and direct messages
//!
//! Tests for:
//! - GET /conversations, POST /conversations
//! - GET /conversations/{conversation_id}/messages
//! - POST /messages, GET /messages/unread, PATCH /messages/{message_id}/read

mod common;

#[cfg(test)]
mod conversation_tests {
    use super::common::*;
    use axum_test::http::{HeaderName, StatusCode};
    use marketplace::dtos::CreateMessageDTO;
    use marketplace::repositories::{Create, Read};
    use serde_json::{Value, json};
    use sqlx::SqlitePool;

    // ============================================================
    // GET /conversations, POST /conversations
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "conversations")))]
    async fn test_list_conversations(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let response = server
            .get("/conversations")
            .add_header(HeaderName::from_static("authorization"), bearer(BOB))
            .await;

        response.assert_status_ok();
        let conversations: Vec<Value> = response.json();
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0]["participants"], json!([1, 2]));
        assert_eq!(conversations[0]["last_message_id"], 2);

        let none = server
            .get("/conversations")
            .add_header(HeaderName::from_static("authorization"), bearer(DARIO))
            .await;
        let conversations: Vec<Value> = none.json();
        assert!(conversations.is_empty());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "conversations")))]
    async fn test_start_existing_conversation(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let response = server
            .post("/conversations")
            .add_header(HeaderName::from_static("authorization"), bearer(BOB))
            .json(&json!({ "participant_id": 1 }))
            .await;

        response.assert_status_ok();
        let conversation: Value = response.json();
        assert_eq!(conversation["conversation_id"], 1);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "conversations")))]
    async fn test_start_conversation_is_order_independent(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let created = server
            .post("/conversations")
            .add_header(HeaderName::from_static("authorization"), bearer(DARIO))
            .json(&json!({ "participant_id": 1 }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let created: Value = created.json();
        assert_eq!(created["participants"], json!([1, 4]));

        let found = server
            .post("/conversations")
            .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
            .json(&json!({ "participant_id": 4 }))
            .await;
        found.assert_status_ok();
        let found: Value = found.json();
        assert_eq!(found["conversation_id"], created["conversation_id"]);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_start_conversation_with_self(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let response = server
            .post("/conversations")
            .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
            .json(&json!({ "participant_id": 1 }))
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_start_conversation_with_unknown_user(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let response = server
            .post("/conversations")
            .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
            .json(&json!({ "participant_id": 99 }))
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // GET /conversations/{conversation_id}/messages
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "conversations")))]
    async fn test_get_messages_newest_first(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let response = server
            .get("/conversations/1/messages")
            .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
            .await;

        response.assert_status_ok();
        let messages: Vec<Value> = response.json();
        let ids: Vec<i64> = messages
            .iter()
            .map(|m| m["message_id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(messages[0]["priority"], true);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "conversations")))]
    async fn test_get_messages_before_date(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let response = server
            .get("/conversations/1/messages")
            .add_query_param("before_date", "2024-05-10T09:05:00Z")
            .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
            .await;

        response.assert_status_ok();
        let messages: Vec<Value> = response.json();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["message_id"], 1);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "conversations")))]
    async fn test_get_messages_as_outsider(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let response = server
            .get("/conversations/1/messages")
            .add_header(HeaderName::from_static("authorization"), bearer(DARIO))
            .await;

        response.assert_status_forbidden();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "conversations")))]
    async fn test_get_messages_missing_conversation(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let response = server
            .get("/conversations/50/messages")
            .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // POST /messages - send_message
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "conversations")))]
    async fn test_send_message_opens_conversation(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let response = server
            .post("/messages")
            .add_header(HeaderName::from_static("authorization"), bearer(DARIO))
            .json(&json!({ "recipient_id": 2, "content": "Hello Bob!" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let message: Value = response.json();
        assert_eq!(message["sender_id"], 4);
        assert_eq!(message["recipient_id"], 2);
        assert_eq!(message["read"], false);
        assert_eq!(message["priority"], false);

        let conversations: Vec<Value> = server
            .get("/conversations")
            .add_header(HeaderName::from_static("authorization"), bearer(BOB))
            .await
            .json();
        assert_eq!(conversations.len(), 2);
        // most recently updated first
        assert_eq!(conversations[0]["participants"], json!([2, 4]));
        assert_eq!(conversations[0]["last_message_id"], message["message_id"]);
        assert_eq!(conversations[0]["conversation_id"], message["conversation_id"]);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "conversations")))]
    async fn test_send_message_reuses_conversation(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let response = server
            .post("/messages")
            .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
            .json(&json!({ "recipient_id": 2, "content": "See you then", "priority": true }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let message: Value = response.json();
        assert_eq!(message["conversation_id"], 1);
        assert_eq!(message["priority"], true);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_send_message_to_self(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let response = server
            .post("/messages")
            .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
            .json(&json!({ "recipient_id": 1, "content": "Note to self" }))
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_send_message_to_unknown_user(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let response = server
            .post("/messages")
            .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
            .json(&json!({ "recipient_id": 99, "content": "Anyone there?" }))
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_send_message_content_bounds(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        for content in [String::new(), "x".repeat(1001)] {
            let response = server
                .post("/messages")
                .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
                .json(&json!({ "recipient_id": 2, "content": content }))
                .await;
            response.assert_status_bad_request();
        }
        Ok(())
    }

    // ============================================================
    // GET /messages/unread, PATCH /messages/{message_id}/read
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "conversations")))]
    async fn test_unread_and_mark_read(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let unread: Vec<Value> = server
            .get("/messages/unread")
            .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
            .await
            .json();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0]["message_id"], 2);

        // the sender cannot mark it
        server
            .patch("/messages/2/read")
            .add_header(HeaderName::from_static("authorization"), bearer(BOB))
            .await
            .assert_status_forbidden();

        let response = server
            .patch("/messages/2/read")
            .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
            .await;
        response.assert_status_ok();
        let message: Value = response.json();
        assert_eq!(message["read"], true);

        let unread: Vec<Value> = server
            .get("/messages/unread")
            .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
            .await
            .json();
        assert!(unread.is_empty());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "conversations")))]
    async fn test_mark_missing_message(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let response = server
            .patch("/messages/123/read")
            .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // last_message_id bookkeeping
    // ============================================================

    fn reply(content: &str) -> CreateMessageDTO {
        CreateMessageDTO {
            conversation_id: 1,
            sender_id: 1,
            recipient_id: 2,
            content: content.to_string(),
            priority: false,
        }
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "conversations")))]
    async fn test_new_message_becomes_last_message(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        let message = state.msg.create(&reply("On my way")).await?;

        let conversation = state.conversation.read(&1).await?.unwrap();
        assert_eq!(conversation.last_message_id, Some(message.message_id));
        assert_eq!(conversation.updated_at, message.created_at);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "conversations")))]
    async fn test_last_message_never_moves_backwards(pool: SqlitePool) -> sqlx::Result<()> {
        // a newer message was already recorded by a concurrent sender
        sqlx::query("UPDATE conversations SET last_message_id = 100 WHERE conversation_id = 1")
            .execute(&pool)
            .await?;
        let state = create_test_state(pool);

        let older = state.msg.create(&reply("Late arrival")).await?;
        assert!(older.message_id < 100);

        let conversation = state.conversation.read(&1).await?.unwrap();
        assert_eq!(conversation.last_message_id, Some(100));
        // the message itself is still stored
        assert!(state.msg.read(&older.message_id).await?.is_some());
        Ok(())
    }
}
