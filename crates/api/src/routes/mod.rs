pub mod admin;
pub mod booking;
pub mod health;
pub mod media;
pub mod project;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   banner (public)
/// /root                               banner (public)
///
/// /projects                           list (public)
/// /projects/{id}                      get (public)
///
/// /bookings                           submit inquiry (public, POST)
///
/// /cloudinary/signature               signed upload params (admin)
///
/// /admin/projects                     create (admin, POST)
/// /admin/projects/{id}                update, delete (admin)
/// /admin/bookings                     list (admin)
/// /admin/bookings/{id}                update status (admin, PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::index))
        .route("/root", get(handlers::root::index))
        .nest("/projects", project::router())
        .nest("/bookings", booking::router())
        .nest("/cloudinary", media::router())
        .nest("/admin", admin::router())
}
