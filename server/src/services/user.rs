//! User services - Profiles and user administration

use crate::core::{AppError, AppState, require_admin};
use crate::dtos::{PublicUserDTO, UpdateRoleDTO, UpdateUserDTO, UserDTO};
use crate::entities::User;
use crate::repositories::{Read, Update};
use axum::{
    Extension,
    extract::{Json, Path, State},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(current_user), fields(user_id = %current_user.user_id))]
pub async fn get_me(Extension(current_user): Extension<User>) -> Json<UserDTO> {
    Json(UserDTO::from(current_user))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id))]
pub async fn update_me(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<UpdateUserDTO>,
) -> Result<Json<UserDTO>, AppError> {
    body.validate()?;

    let password = body
        .password
        .as_deref()
        .map(User::hash_password)
        .transpose()?;
    let changes = UpdateUserDTO { password, ..body };

    let updated = state.user.update(&current_user.user_id, &changes).await?;
    info!("Profile updated");
    Ok(Json(UserDTO::from(updated)))
}

#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn get_user_by_id(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<PublicUserDTO>, AppError> {
    debug!("Fetching user by ID");
    let user = state.user.read(&user_id).await?.ok_or_else(|| {
        warn!("User not found");
        AppError::not_found("User not found")
    })?;
    Ok(Json(PublicUserDTO::from(user)))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<UserDTO>>, AppError> {
    require_admin(&current_user)?;
    let users = state.user.list().await?;
    info!("Listing {} users", users.len());
    Ok(Json(users.into_iter().map(UserDTO::from).collect()))
}

#[instrument(skip(state, current_user, body), fields(admin_id = %current_user.user_id, target = %user_id))]
pub async fn update_user_role(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i64>,
    Json(body): Json<UpdateRoleDTO>,
) -> Result<Json<UserDTO>, AppError> {
    require_admin(&current_user)?;
    if user_id == current_user.user_id {
        return Err(AppError::bad_request("Admins cannot change their own role"));
    }
    let updated = state.user.update_role(&user_id, body.role).await?;
    Ok(Json(UserDTO::from(updated)))
}
