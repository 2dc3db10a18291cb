use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Public routes mounted at `/projects`.
///
/// ```text
/// GET    /        -> list
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/{id}", get(project::get_by_id))
}
