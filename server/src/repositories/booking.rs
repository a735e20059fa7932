//! BookingRepository - Repository for bookings

use super::{Create, Read};
use crate::dtos::CreateBookingDTO;
use crate::entities::{Booking, BookingStatus};
use chrono::Utc;
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

pub struct BookingRepository {
    connection_pool: SqlitePool,
}

impl BookingRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Bookings made by a user, most recent schedule first, optionally filtered by status
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn find_many_by_user_id(
        &self,
        user_id: &i64,
        status: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, Error> {
        debug!("Listing bookings for user");
        sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE user_id = ?1 AND (?2 IS NULL OR status = ?2)
            ORDER BY scheduled_date DESC, scheduled_time DESC, booking_id DESC
            "#,
        )
        .bind(user_id)
        .bind(status)
        .fetch_all(&self.connection_pool)
        .await
    }

    /// Every booking, for admins
    pub async fn list(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>, Error> {
        sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE ?1 IS NULL OR status = ?1
            ORDER BY scheduled_date DESC, scheduled_time DESC, booking_id DESC
            "#,
        )
        .bind(status)
        .fetch_all(&self.connection_pool)
        .await
    }

    /// Moves the booking from `from` to `to` as a single compare-and-set.
    ///
    /// Returns `None` when the booking is missing or no longer has status `from`,
    /// so a caller acting on a stale copy never overwrites a newer status.
    #[instrument(skip(self), fields(booking_id = %booking_id, from = %from, to = %to))]
    pub async fn update_status(
        &self,
        booking_id: &i64,
        from: BookingStatus,
        to: BookingStatus,
    ) -> Result<Option<Booking>, Error> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET status = ?, updated_at = ?
            WHERE booking_id = ? AND status = ?
            RETURNING *
            "#,
        )
        .bind(to)
        .bind(Utc::now())
        .bind(booking_id)
        .bind(from)
        .fetch_optional(&self.connection_pool)
        .await?;

        match &booking {
            Some(_) => info!("Booking status updated"),
            None => debug!("Booking status changed concurrently or booking missing"),
        }
        Ok(booking)
    }
}

impl Create<Booking, CreateBookingDTO> for BookingRepository {
    #[instrument(skip(self, data), fields(user_id = %data.user_id, expert_id = %data.expert_id))]
    async fn create(&self, data: &CreateBookingDTO) -> Result<Booking, Error> {
        let now = Utc::now();
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (user_id, service_id, expert_id, scheduled_date, scheduled_time, duration, status, notes, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(data.user_id)
        .bind(data.service_id)
        .bind(data.expert_id)
        .bind(data.scheduled_date)
        .bind(&data.scheduled_time)
        .bind(data.duration)
        .bind(BookingStatus::Pending)
        .bind(&data.notes)
        .bind(now)
        .bind(now)
        .fetch_one(&self.connection_pool)
        .await?;

        info!("Booking created with id {}", booking.booking_id);
        Ok(booking)
    }
}

impl Read<Booking, i64> for BookingRepository {
    async fn read(&self, id: &i64) -> Result<Option<Booking>, Error> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE booking_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
