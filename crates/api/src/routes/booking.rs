use axum::routing::post;
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Public routes mounted at `/bookings`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(booking::create))
}
