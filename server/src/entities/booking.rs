//! Booking entity - A user's reservation of an expert's service

use super::enums::BookingStatus;
use super::error::InvariantError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const MIN_DURATION_MINUTES: i64 = 15;
pub const MAX_DURATION_MINUTES: i64 = 480;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Booking {
    pub booking_id: i64,
    pub user_id: i64,
    pub service_id: i64,
    pub expert_id: i64,
    pub scheduled_date: NaiveDate,
    // "HH:MM", 24h clock
    pub scheduled_time: String,
    /// Minutes, within [MIN_DURATION_MINUTES, MAX_DURATION_MINUTES]
    pub duration: i64,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Checks that the booking may move to `next` and returns it.
    pub fn transition(&self, next: BookingStatus) -> Result<BookingStatus, InvariantError> {
        if self.status.can_transition_to(next) {
            Ok(next)
        } else {
            Err(InvariantError::IllegalTransition {
                from: self.status,
                to: next,
            })
        }
    }

    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}
