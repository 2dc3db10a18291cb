//! Project entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
///
/// `category` is one of Photography, Videography or Editing by convention;
/// nothing below the UI enforces it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: Option<String>,
    pub category: Option<String>,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_at: Timestamp,
}

/// Body of both create and update requests.
///
/// Updates overwrite every column, so a field missing from the body is
/// stored as `NULL`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInput {
    pub title: Option<String>,
    pub category: Option<String>,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
}
