//! Signed-upload handout for the admin media picker.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use folio_core::media::{upload_signature, UploadSignature};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignatureQuery {
    pub resource_type: Option<String>,
}

/// GET /api/cloudinary/signature?resource_type=video
pub async fn signature(
    _admin: AdminUser,
    State(state): State<AppState>,
    query: Result<Query<SignatureQuery>, QueryRejection>,
) -> AppResult<Json<UploadSignature>> {
    let Query(query) = query?;
    let credentials = state
        .config
        .media
        .as_ref()
        .ok_or_else(|| AppError::InternalError("Media host credentials are not configured".into()))?;

    let signature = upload_signature(
        credentials,
        query.resource_type.as_deref(),
        Utc::now().timestamp(),
    );
    Ok(Json(signature))
}
