//! Auth services - Login and registration

use crate::core::{AppError, AppState, encode_jwt};
use crate::dtos::{CreateUserDTO, LoginResponseDTO, UserDTO};
use crate::entities::{User, normalize_email};
use crate::repositories::Create;
use axum::{
    extract::{Json, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

/// DTO for login (email and password only)
#[derive(serde::Deserialize)]
pub struct LoginDTO {
    pub email: String,
    pub password: String,
}

#[instrument(skip(state, body))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>,
) -> Result<impl IntoResponse, AppError> {
    // 1. Look the user up by normalized email, unknown email -> UNAUTHORIZED
    // 2. Check the password against the stored hash, mismatch -> UNAUTHORIZED
    // 3. Issue a JWT with id and email
    // 4. Return it in a HttpOnly cookie, in the Authorization header and in the body
    let email = normalize_email(&body.email);

    let user = match state.user.find_by_email(&email).await? {
        Some(user) => user,
        None => {
            warn!("Login attempt for unknown email");
            return Err(AppError::unauthorized("Invalid email or password"));
        }
    };

    if !user.verify_password(&body.password) {
        warn!("Wrong password for user {}", user.user_id);
        return Err(AppError::unauthorized("Invalid email or password"));
    }

    let token = encode_jwt(
        user.user_id,
        &user.email,
        &state.jwt_secret,
        state.jwt_expiry_days,
    )?;

    // Secure is off in development, where the server speaks plain HTTP
    let cookie_value = format!(
        "token={}; HttpOnly;{} SameSite=Lax; Path=/; Max-Age={}",
        token,
        if state.secure_cookies { " Secure;" } else { "" },
        state.jwt_expiry_days * 24 * 60 * 60
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&cookie_value)
            .map_err(|_| AppError::internal_server_error("Failed to build cookie"))?,
    );
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| AppError::internal_server_error("Failed to build header"))?,
    );

    info!("User {} logged in", user.user_id);
    Ok((
        StatusCode::OK,
        headers,
        Json(LoginResponseDTO {
            token,
            user: UserDTO::from(user),
        }),
    ))
}

#[instrument(skip(state, body))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserDTO>,
) -> Result<(StatusCode, Json<UserDTO>), AppError> {
    // 1. Normalize the email and validate the DTO
    // 2. Reject an email that is already taken (CONFLICT)
    // 3. Hash the password and store the user with role "user"
    let body = CreateUserDTO {
        email: normalize_email(&body.email),
        ..body
    };
    body.validate()?;

    if state.user.find_by_email(&body.email).await?.is_some() {
        warn!("Registration with an email already in use");
        return Err(AppError::conflict("Email already registered"));
    }

    let password_hash = User::hash_password(&body.password)?;

    let new_user = CreateUserDTO {
        password: password_hash,
        ..body
    };

    // the unique index still catches a concurrent registration as 409
    let created_user = state.user.create(&new_user).await?;

    info!("User {} registered", created_user.user_id);
    Ok((StatusCode::CREATED, Json(UserDTO::from(created_user))))
}
