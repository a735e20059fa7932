//! User entity - User entity with password handling

use super::enums::UserRole;
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct User {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Always stored trimmed and lowercase, see [`normalize_email`]
    pub email: String,
    // bcrypt hash, never sent back to the client
    #[serde(skip_serializing)]
    pub password: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Verify if target_password matches the stored hashed password
    pub fn verify_password(&self, target_password: &str) -> bool {
        verify(target_password, &self.password).unwrap_or(false)
    }

    /// Hash a password using bcrypt with default cost
    pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
        let hash = hash(password, DEFAULT_COST)?;
        Ok(hash)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Canonical form of an email address: trimmed and lowercase.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(password: &str) -> User {
        User {
            user_id: 1,
            first_name: "Alice".to_string(),
            last_name: "Rossi".to_string(),
            email: "alice@example.com".to_string(),
            password: password.to_string(),
            role: UserRole::User,
            phone: None,
            bio: None,
            avatar_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn password_roundtrip_through_bcrypt() {
        // low cost keeps the test fast
        let hashed = bcrypt::hash("Sup3rSecret!", 4).unwrap();
        let user = sample_user(&hashed);
        assert!(user.verify_password("Sup3rSecret!"));
        assert!(!user.verify_password("wrong"));
    }

    #[test]
    fn empty_hash_never_verifies() {
        let user = sample_user("");
        assert!(!user.verify_password(""));
    }

    #[test]
    fn password_is_never_serialized() {
        let user = sample_user("$2b$04$abcdefghijklmnopqrstuv");
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "user");
        assert!(!user.is_admin());
    }
}
