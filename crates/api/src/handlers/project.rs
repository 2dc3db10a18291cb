//! Handlers for the `/projects` and `/admin/projects` resources.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::project::{Project, ProjectInput};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AdminUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.store.list_projects().await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Project>> {
    let Path(id) = path?;
    let project = state
        .store
        .find_project(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// POST /api/admin/projects
pub async fn create(
    admin: AdminUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProjectInput>,
) -> AppResult<Json<Project>> {
    let project = state.store.create_project(&input).await?;
    tracing::info!(admin_id = %admin.identity.id, project_id = %project.id, "Project created");
    Ok(Json(project))
}

/// PUT /api/admin/projects/{id}
pub async fn update(
    admin: AdminUser,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    JsonBody(input): JsonBody<ProjectInput>,
) -> AppResult<Json<Project>> {
    let Path(id) = path?;
    let project = state
        .store
        .update_project(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(admin_id = %admin.identity.id, project_id = %id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/admin/projects/{id}
///
/// Succeeds whether or not the row existed.
pub async fn delete(
    admin: AdminUser,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let Path(id) = path?;
    if state.store.delete_project(id).await? {
        tracing::info!(admin_id = %admin.identity.id, project_id = %id, "Project deleted");
    } else {
        tracing::debug!(project_id = %id, "Delete matched no project");
    }
    Ok(Json(SuccessResponse { success: true }))
}
