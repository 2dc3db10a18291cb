//! Repository for the `bookings` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::booking::{Booking, CreateBooking, NEW_BOOKING_STATUS};

const COLUMNS: &str =
    "id, client_name, client_email, event_date, service_type, message, status, created_at";

/// Provides insert, list and status updates for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a booking inquiry. The status column is always `New`.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (client_name, client_email, event_date, service_type, message, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(&input.client_name)
            .bind(&input.client_email)
            .bind(input.event_date)
            .bind(&input.service_type)
            .bind(&input.message)
            .bind(NEW_BOOKING_STATUS)
            .fetch_one(pool)
            .await
    }

    /// List all bookings, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY created_at DESC");
        sqlx::query_as::<_, Booking>(&query).fetch_all(pool).await
    }

    /// Set the status of a booking, leaving every other column alone.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("UPDATE bookings SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
