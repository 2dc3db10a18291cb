use axum::Json;

use crate::response::MessageResponse;

/// GET /api, GET /api/ and GET /api/root
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Photographer Portfolio API",
    })
}
