//! UserRepository - Repository for users

use super::{Create, Read, Update};
use crate::dtos::{CreateUserDTO, UpdateUserDTO};
use crate::entities::{User, UserRole};
use chrono::Utc;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

pub struct UserRepository {
    connection_pool: SqlitePool,
}

impl UserRepository {
    pub fn new(connection_pool: SqlitePool) -> UserRepository {
        Self { connection_pool }
    }

    /// Exact match; callers pass an already normalized email
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        debug!("Looking up user by email");
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.connection_pool)
            .await
    }

    /// All users, newest first
    pub async fn list(&self) -> Result<Vec<User>, Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC, user_id DESC")
            .fetch_all(&self.connection_pool)
            .await
    }

    #[instrument(skip(self), fields(user_id = %user_id, role = ?role))]
    pub async fn update_role(&self, user_id: &i64, role: UserRole) -> Result<User, Error> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET role = ?, updated_at = ? WHERE user_id = ? RETURNING *",
        )
        .bind(role)
        .bind(Utc::now())
        .bind(user_id)
        .fetch_optional(&self.connection_pool)
        .await?
        .ok_or(Error::RowNotFound)?;

        info!("Role updated");
        Ok(user)
    }
}

impl Create<User, CreateUserDTO> for UserRepository {
    #[instrument(skip(self, data))]
    async fn create(&self, data: &CreateUserDTO) -> Result<User, Error> {
        let now = Utc::now();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email, password, role, phone, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.password)
        .bind(UserRole::User)
        .bind(&data.phone)
        .bind(now)
        .bind(now)
        .fetch_one(&self.connection_pool)
        .await?;

        info!("User created with id {}", user.user_id);
        Ok(user)
    }
}

impl Read<User, i64> for UserRepository {
    async fn read(&self, id: &i64) -> Result<Option<User>, Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl Update<User, UpdateUserDTO, i64> for UserRepository {
    /// `data.password`, when present, must already be hashed
    #[instrument(skip(self, data), fields(user_id = %id))]
    async fn update(&self, id: &i64, data: &UpdateUserDTO) -> Result<User, Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                first_name = COALESCE(?, first_name),
                last_name = COALESCE(?, last_name),
                phone = COALESCE(?, phone),
                bio = COALESCE(?, bio),
                avatar_url = COALESCE(?, avatar_url),
                password = COALESCE(?, password),
                updated_at = ?
            WHERE user_id = ?
            RETURNING *
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.phone)
        .bind(&data.bio)
        .bind(&data.avatar_url)
        .bind(&data.password)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?
        .ok_or(Error::RowNotFound)?;

        debug!("Profile updated");
        Ok(user)
    }
}
