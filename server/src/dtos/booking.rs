//! Booking DTOs - Data Transfer Objects for bookings

use super::TIME_OF_DAY;
use crate::entities::BookingStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /bookings`; the booking is always made for the authenticated user
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct BookingRequestDTO {
    pub service_id: i64,
    pub expert_id: i64,
    pub scheduled_date: NaiveDate,

    #[validate(regex(path = *TIME_OF_DAY, message = "Time must use the HH:MM 24h format"))]
    pub scheduled_time: String,

    #[validate(range(min = 15, max = 480, message = "Duration must be between 15 and 480 minutes"))]
    pub duration: i64,

    #[validate(length(max = 500, message = "Notes cannot exceed 500 characters"))]
    pub notes: Option<String>,
}

/// DTO for creating a new booking (without booking_id, status and timestamps)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateBookingDTO {
    pub user_id: i64,
    pub service_id: i64,
    pub expert_id: i64,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: String,
    pub duration: i64,
    pub notes: Option<String>,
}

impl CreateBookingDTO {
    pub fn for_user(user_id: i64, request: BookingRequestDTO) -> Self {
        Self {
            user_id,
            service_id: request.service_id,
            expert_id: request.expert_id,
            scheduled_date: request.scheduled_date,
            scheduled_time: request.scheduled_time,
            duration: request.duration,
            notes: request.notes,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateBookingStatusDTO {
    pub status: BookingStatus,
}
