//! Route definitions for the admin dashboard.
//!
//! Every handler here takes [`AdminUser`](crate::middleware::auth::AdminUser)
//! as its first extractor, so a request without a verified token is rejected
//! with 401 before the store is touched.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{booking, project};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST   /projects         -> project::create
/// PUT    /projects/{id}    -> project::update
/// DELETE /projects/{id}    -> project::delete
///
/// GET    /bookings         -> booking::list
/// PUT    /bookings/{id}    -> booking::update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", post(project::create))
        .route("/projects/{id}", put(project::update).delete(project::delete))
        .route("/bookings", get(booking::list))
        .route("/bookings/{id}", put(booking::update_status))
}
