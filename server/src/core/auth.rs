use crate::core::{AppError, AppState};
use crate::entities::User;
use crate::repositories::Read;
use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::HeaderMap, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Content of the JWT token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
    pub id: i64,
    pub email: String,
}

#[instrument(skip_all, fields(id = %id))]
pub fn encode_jwt(
    id: i64,
    email: &str,
    secret: &str,
    expiry_days: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let exp = (now + Duration::days(expiry_days)).timestamp() as usize;
    let iat = now.timestamp() as usize;
    let claim = Claims {
        iat,
        exp,
        id,
        email: email.to_string(),
    };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(
    jwt_token: &str,
    secret: &str,
) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    decode(
        jwt_token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
}

/// Token from `Authorization: Bearer <token>`, falling back to the `token` cookie set at login.
fn extract_token(headers: &HeaderMap) -> Result<String, AppError> {
    if let Some(header) = headers.get(http::header::AUTHORIZATION) {
        let value = header.to_str().map_err(|_| {
            warn!("Invalid authorization header format");
            AppError::forbidden("Empty header is not allowed")
        })?;
        let mut parts = value.split_whitespace();
        return match (parts.next(), parts.next()) {
            (Some("Bearer"), Some(token)) => Ok(token.to_string()),
            _ => {
                warn!("Malformed authorization header");
                Err(AppError::forbidden("Authorization header must be 'Bearer <token>'"))
            }
        };
    }

    headers
        .get_all(http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| cookie.trim().strip_prefix("token="))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            warn!("Missing authorization header");
            AppError::forbidden("Please add the JWT token to the header")
        })
}

/// Authenticates the request and stores the current [`User`] in the request extensions.
#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let token = extract_token(req.headers())?;

    let token_data = decode_jwt(&token, &state.jwt_secret).map_err(|e| {
        warn!("Failed to decode JWT token: {:?}", e);
        AppError::unauthorized("Unable to decode token")
    })?;

    // Fetch the user from the database, the token may outlive the account's role or email
    let current_user = match state.user.read(&token_data.claims.id).await? {
        Some(user) => {
            info!("User authenticated: {}", user.user_id);
            user
        }
        None => {
            warn!("User not found in database: {}", token_data.claims.id);
            return Err(AppError::unauthorized("You are not an authorized user"));
        }
    };
    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

/// Fails with 403 unless the user is an admin
pub fn require_admin(user: &User) -> Result<(), AppError> {
    if !user.is_admin() {
        warn!("User {} attempted an admin-only action", user.user_id);
        return Err(AppError::forbidden("Insufficient role")
            .with_details("This action requires the admin role"));
    }
    Ok(())
}
