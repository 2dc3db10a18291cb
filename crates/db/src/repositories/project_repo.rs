//! Repository for the `projects` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{Project, ProjectInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, category, media_url, thumbnail_url, created_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &ProjectInput) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, category, media_url, thumbnail_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.media_url)
            .bind(&input.thumbnail_url)
            .fetch_one(pool)
            .await
    }

    /// Find a project by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Overwrite every editable column of a project.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProjectInput,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = $2,
                category = $3,
                media_url = $4,
                thumbnail_url = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.media_url)
            .bind(&input.thumbnail_url)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
