//! Enquiry services - Public contact form and its admin inbox

use crate::core::{AppError, AppState, require_admin};
use crate::dtos::{CreateEnquiryDTO, EnquiriesQuery, UpdateEnquiryStatusDTO};
use crate::entities::{Enquiry, User};
use crate::repositories::Create;
use axum::{
    Extension,
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

#[instrument(skip(state, body))]
pub async fn create_enquiry(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateEnquiryDTO>,
) -> Result<(StatusCode, Json<Enquiry>), AppError> {
    body.validate()?;
    let enquiry = state.enquiry.create(&body).await?;
    info!("Enquiry {} received", enquiry.enquiry_id);
    Ok((StatusCode::CREATED, Json(enquiry)))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn list_enquiries(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Query(params): Query<EnquiriesQuery>,
) -> Result<Json<Vec<Enquiry>>, AppError> {
    require_admin(&current_user)?;
    Ok(Json(state.enquiry.list(params.status).await?))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id, status = ?body.status))]
pub async fn update_enquiry_status(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(enquiry_id): Path<i64>,
    Json(body): Json<UpdateEnquiryStatusDTO>,
) -> Result<Json<Enquiry>, AppError> {
    require_admin(&current_user)?;
    let enquiry = state.enquiry.update_status(&enquiry_id, body.status).await?;
    Ok(Json(enquiry))
}
