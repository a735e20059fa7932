//! User DTOs - Data Transfer Objects for users

use super::PHONE_NUMBER;
use crate::entities::{User, UserRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// What the client gets to see of a user
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserDTO {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            user_id: value.user_id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            role: value.role,
            phone: value.phone,
            bio: value.bio,
            avatar_url: value.avatar_url,
            created_at: value.created_at,
        }
    }
}

/// Profile of another user: contact details stay private
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PublicUserDTO {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUserDTO {
    fn from(value: User) -> Self {
        Self {
            user_id: value.user_id,
            first_name: value.first_name,
            last_name: value.last_name,
            role: value.role,
            bio: value.bio,
            avatar_url: value.avatar_url,
            created_at: value.created_at,
        }
    }
}

/// DTO for registering a new user (without user_id).
/// The handler replaces `password` with its hash and normalizes `email` before storing it.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateUserDTO {
    #[validate(length(min = 1, max = 50, message = "First name must be between 1 and 50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "Last name must be between 1 and 50 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters"))]
    pub password: String,

    #[validate(regex(path = *PHONE_NUMBER, message = "Invalid phone number"))]
    pub phone: Option<String>,
}

/// DTO for updating a profile (only `Some(_)` fields are changed)
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateUserDTO {
    #[validate(length(min = 1, max = 50, message = "First name must be between 1 and 50 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Last name must be between 1 and 50 characters"))]
    pub last_name: Option<String>,

    #[validate(regex(path = *PHONE_NUMBER, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(max = 500, message = "Bio cannot exceed 500 characters"))]
    pub bio: Option<String>,

    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar_url: Option<String>,

    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters"))]
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateRoleDTO {
    pub role: UserRole,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponseDTO {
    pub token: String,
    pub user: UserDTO,
}
