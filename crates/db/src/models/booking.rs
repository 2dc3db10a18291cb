//! Booking entity model and DTOs.

use chrono::NaiveDate;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status assigned to every freshly submitted booking.
pub const NEW_BOOKING_STATUS: &str = "New";

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub service_type: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

/// Public booking inquiry.
///
/// There is no `status` field: whatever the client sends is
/// dropped during deserialization and the row starts as
/// [`NEW_BOOKING_STATUS`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBooking {
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub service_type: Option<String>,
    pub message: Option<String>,
}

/// Admin status change. Only `status` is ever written.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBookingStatus {
    pub status: String,
}
