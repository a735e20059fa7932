//! Testimonial services - Submission, public listing and moderation

use crate::core::{AppError, AppState, require_admin};
use crate::dtos::{
    CreateTestimonialDTO, ModerationQuery, TestimonialRequestDTO, TestimonialsQuery,
    UpdateFeaturedDTO, UpdateTestimonialStatusDTO,
};
use crate::entities::{Testimonial, TestimonialStatus, User};
use crate::repositories::Create;
use axum::{
    Extension,
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

/// New testimonials wait in the moderation queue as pending
#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id))]
pub async fn create_testimonial(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<TestimonialRequestDTO>,
) -> Result<(StatusCode, Json<Testimonial>), AppError> {
    body.validate()?;
    let data = CreateTestimonialDTO::for_author(current_user.user_id, body);
    let testimonial = state.testimonial.create(&data).await?;
    info!("Testimonial {} submitted", testimonial.testimonial_id);
    Ok((StatusCode::CREATED, Json(testimonial)))
}

#[instrument(skip(state))]
pub async fn list_testimonials(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TestimonialsQuery>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    let testimonials = state
        .testimonial
        .list_public(params.featured, params.kind)
        .await?;
    Ok(Json(testimonials))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn list_for_moderation(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Query(params): Query<ModerationQuery>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    require_admin(&current_user)?;
    let status = params.status.unwrap_or(TestimonialStatus::Pending);
    Ok(Json(state.testimonial.list_by_status(status).await?))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id, status = ?body.status))]
pub async fn update_testimonial_status(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(testimonial_id): Path<i64>,
    Json(body): Json<UpdateTestimonialStatusDTO>,
) -> Result<Json<Testimonial>, AppError> {
    require_admin(&current_user)?;
    let testimonial = state
        .testimonial
        .update_status(&testimonial_id, body.status)
        .await?;
    Ok(Json(testimonial))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id, featured = %body.featured))]
pub async fn set_testimonial_featured(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(testimonial_id): Path<i64>,
    Json(body): Json<UpdateFeaturedDTO>,
) -> Result<Json<Testimonial>, AppError> {
    require_admin(&current_user)?;
    let testimonial = state
        .testimonial
        .set_featured(&testimonial_id, body.featured)
        .await?;
    Ok(Json(testimonial))
}
