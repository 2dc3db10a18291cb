use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/cloudinary`. Gated by the admin extractor.
pub fn router() -> Router<AppState> {
    Router::new().route("/signature", get(media::signature))
}
