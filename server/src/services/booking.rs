//! Booking services - Creating bookings and moving them through their lifecycle

use crate::core::{AppError, AppState};
use crate::dtos::{BookingRequestDTO, BookingsQuery, CreateBookingDTO, UpdateBookingStatusDTO};
use crate::entities::{Booking, BookingStatus, InvariantError, User};
use crate::repositories::{Create, Read};
use axum::{
    Extension,
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id))]
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<BookingRequestDTO>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    body.validate()?;

    let data = CreateBookingDTO::for_user(current_user.user_id, body);
    let booking = state.booking.create(&data).await?;

    info!("Booking {} created", booking.booking_id);
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Own bookings, or every booking for admins
#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Query(params): Query<BookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = if current_user.is_admin() {
        state.booking.list(params.status).await?
    } else {
        state
            .booking
            .find_many_by_user_id(&current_user.user_id, params.status)
            .await?
    };
    debug!("Returning {} bookings", bookings.len());
    Ok(Json(bookings))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(booking_id): Path<i64>,
) -> Result<Json<Booking>, AppError> {
    let booking = find_visible_booking(&state, &current_user, booking_id).await?;
    Ok(Json(booking))
}

/// Owners may only cancel; admins may apply any legal transition.
#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id, status = %body.status))]
pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(booking_id): Path<i64>,
    Json(body): Json<UpdateBookingStatusDTO>,
) -> Result<Json<Booking>, AppError> {
    let booking = find_visible_booking(&state, &current_user, booking_id).await?;

    if !current_user.is_admin() && body.status != BookingStatus::Cancelled {
        warn!("Non-admin tried to set booking status to {}", body.status);
        return Err(AppError::forbidden("Only admins can change a booking to this status"));
    }

    let next = booking.transition(body.status)?;
    let updated = match state
        .booking
        .update_status(&booking_id, booking.status, next)
        .await?
    {
        Some(updated) => updated,
        None => return Err(changed_concurrently(&state, booking_id, next).await),
    };

    info!("Booking {} is now {}", booking_id, updated.status);
    Ok(Json(updated))
}

/// The compare-and-set lost: report the transition from whatever the status is now
async fn changed_concurrently(state: &AppState, booking_id: i64, next: BookingStatus) -> AppError {
    match state.booking.read(&booking_id).await {
        Ok(Some(current)) => {
            warn!(
                "Booking {} moved to {} before it could become {}",
                booking_id, current.status, next
            );
            InvariantError::IllegalTransition {
                from: current.status,
                to: next,
            }
            .into()
        }
        Ok(None) => AppError::not_found("Booking not found"),
        Err(e) => e.into(),
    }
}

/// 404 when missing, 403 when it belongs to someone else and the caller is not an admin
async fn find_visible_booking(
    state: &AppState,
    current_user: &User,
    booking_id: i64,
) -> Result<Booking, AppError> {
    let booking = state
        .booking
        .read(&booking_id)
        .await?
        .ok_or_else(|| AppError::not_found("Booking not found"))?;

    if !booking.is_owned_by(current_user.user_id) && !current_user.is_admin() {
        warn!("User {} cannot access booking {}", current_user.user_id, booking_id);
        return Err(AppError::forbidden("You cannot access this booking"));
    }
    Ok(booking)
}
