//! Integration tests for the enquiry endpoints
//!
//! Tests for:
//! - POST /enquiries (public)
//! - GET /enquiries (admin)
//! - PATCH /enquiries/{enquiry_id}/status (admin)

mod common;

#[cfg(test)]
mod enquiry_tests {
    use super::common::*;
    use axum_test::http::{HeaderName, StatusCode};
    use serde_json::{Value, json};
    use sqlx::SqlitePool;

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_create_enquiry_without_account(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let body = json!({
            "expert_id": 4,
            "name": "Laura",
            "email": "laura@example.com",
            "phone": "+39 02 555 0101",
            "subject": "Brand identity",
            "message": "Could you quote a full rebrand?"
        });

        let response = server.post("/enquiries").json(&body).await;

        response.assert_status(StatusCode::CREATED);
        let enquiry: Value = response.json();
        assert_eq!(enquiry["status"], "pending");
        assert_eq!(enquiry["expert_id"], 4);
        assert!(enquiry["project_id"].is_null());
        Ok(())
    }

    #[sqlx::test]
    async fn test_create_enquiry_validation(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let invalid = [
            json!({ "name": "Laura", "email": "laura-at-example", "message": "Hello" }),
            json!({ "name": "", "email": "laura@example.com", "message": "Hello" }),
            json!({ "name": "Laura", "email": "laura@example.com", "message": "" }),
            json!({ "name": "Laura", "email": "laura@example.com", "phone": "call me", "message": "Hello" }),
            json!({ "name": "Laura", "email": "laura@example.com", "subject": "s".repeat(201), "message": "Hello" }),
        ];

        for body in invalid {
            let response = server.post("/enquiries").json(&body).await;
            response.assert_status_bad_request();
        }
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "enquiries")))]
    async fn test_list_enquiries_requires_admin(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        server.get("/enquiries").await.assert_status_forbidden();

        server
            .get("/enquiries")
            .add_header(HeaderName::from_static("authorization"), bearer(ALICE))
            .await
            .assert_status_forbidden();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "enquiries")))]
    async fn test_list_enquiries_as_admin(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let all: Vec<Value> = server
            .get("/enquiries")
            .add_header(HeaderName::from_static("authorization"), bearer(CARLA_ADMIN))
            .await
            .json();
        assert_eq!(all.len(), 2);
        // newest first
        assert_eq!(all[0]["enquiry_id"], 2);

        let closed: Vec<Value> = server
            .get("/enquiries")
            .add_query_param("status", "closed")
            .add_header(HeaderName::from_static("authorization"), bearer(CARLA_ADMIN))
            .await
            .json();
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0]["name"], "Marco");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "enquiries")))]
    async fn test_update_enquiry_status(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        let response = server
            .patch("/enquiries/1/status")
            .add_header(HeaderName::from_static("authorization"), bearer(CARLA_ADMIN))
            .json(&json!({ "status": "responded" }))
            .await;

        response.assert_status_ok();
        let enquiry: Value = response.json();
        assert_eq!(enquiry["status"], "responded");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "enquiries")))]
    async fn test_update_enquiry_status_errors(pool: SqlitePool) -> sqlx::Result<()> {
        let server = create_server(pool);

        server
            .patch("/enquiries/1/status")
            .add_header(HeaderName::from_static("authorization"), bearer(BOB))
            .json(&json!({ "status": "closed" }))
            .await
            .assert_status_forbidden();

        server
            .patch("/enquiries/404/status")
            .add_header(HeaderName::from_static("authorization"), bearer(CARLA_ADMIN))
            .json(&json!({ "status": "closed" }))
            .await
            .assert_status_not_found();
        Ok(())
    }
}
