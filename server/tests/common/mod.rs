#![allow(dead_code)]

use axum_test::TestServer;
use marketplace::core::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const JWT_SECRET: &str = "marketplace-test-secret-that-is-long-enough";

/// Creates an AppState for the tests
///
/// # Arguments
/// * `pool` - SQLite connection pool prepared by `#[sqlx::test]`
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool, JWT_SECRET.to_string()))
}

/// Creates a TestServer around the full application router
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = marketplace::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Shortcut for the two calls above
pub fn create_server(pool: SqlitePool) -> TestServer {
    create_test_server(create_test_state(pool))
}

/// Generates a JWT token for testing, valid for 7 days
///
/// # Arguments
/// * `user_id` - ID of the user the token is for
/// * `email` - Email of the user
/// * `jwt_secret` - Secret key used to sign the token
pub fn create_test_jwt(user_id: i64, email: &str, jwt_secret: &str) -> String {
    marketplace::core::encode_jwt(user_id, email, jwt_secret, 7).expect("Failed to create JWT token")
}

/// `Bearer <token>` for one of the fixture users
pub fn bearer_for(user_id: i64, email: &str) -> String {
    format!("Bearer {}", create_test_jwt(user_id, email, JWT_SECRET))
}

// Fixture users (fixtures/users.sql)
pub const ALICE: (i64, &str) = (1, "alice@example.com");
pub const BOB: (i64, &str) = (2, "bob@example.com");
pub const CARLA_ADMIN: (i64, &str) = (3, "carla@example.com");
pub const DARIO: (i64, &str) = (4, "dario@example.com");

pub fn bearer(user: (i64, &str)) -> String {
    bearer_for(user.0, user.1)
}
