//! Handlers for the `/bookings` and `/admin/bookings` resources.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::booking::{Booking, CreateBooking, UpdateBookingStatus};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

/// POST /api/bookings
///
/// Public inquiry form. The stored status is always `New`.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateBooking>,
) -> AppResult<Json<Booking>> {
    let booking = state.store.create_booking(&input).await?;
    tracing::info!(booking_id = %booking.id, "Booking received");
    Ok(Json(booking))
}

/// GET /api/admin/bookings
pub async fn list(_admin: AdminUser, State(state): State<AppState>) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.store.list_bookings().await?;
    Ok(Json(bookings))
}

/// PUT /api/admin/bookings/{id}
pub async fn update_status(
    admin: AdminUser,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    JsonBody(input): JsonBody<UpdateBookingStatus>,
) -> AppResult<Json<Booking>> {
    let Path(id) = path?;
    let booking = state
        .store
        .update_booking_status(id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    tracing::info!(
        admin_id = %admin.identity.id,
        booking_id = %id,
        status = %booking.status,
        "Booking status updated"
    );
    Ok(Json(booking))
}
