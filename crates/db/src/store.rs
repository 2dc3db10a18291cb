//! The persistence seam injected into the HTTP layer.

use async_trait::async_trait;
use folio_core::types::DbId;

use crate::models::booking::{Booking, CreateBooking};
use crate::models::project::{Project, ProjectInput};

/// Errors surfaced by a [`PortfolioStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database driver reported a failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The backing store refused the operation.
    #[error("Store rejected operation: {0}")]
    Rejected(String),
}

/// CRUD over the `projects` and `bookings` tables.
///
/// Lookups and updates return `Ok(None)` when the row does not exist, so the
/// caller decides what "missing" means for its route.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Confirm the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// All projects, newest first.
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;

    async fn find_project(&self, id: DbId) -> Result<Option<Project>, StoreError>;

    async fn create_project(&self, input: &ProjectInput) -> Result<Project, StoreError>;

    /// Overwrite every editable column of a project.
    async fn update_project(
        &self,
        id: DbId,
        input: &ProjectInput,
    ) -> Result<Option<Project>, StoreError>;

    /// Returns `true` if a row was removed.
    async fn delete_project(&self, id: DbId) -> Result<bool, StoreError>;

    /// All bookings, newest first.
    async fn list_bookings(&self) -> Result<Vec<Booking>, StoreError>;

    /// Insert a booking with status `New`.
    async fn create_booking(&self, input: &CreateBooking) -> Result<Booking, StoreError>;

    /// Change only the status column of a booking.
    async fn update_booking_status(
        &self,
        id: DbId,
        status: &str,
    ) -> Result<Option<Booking>, StoreError>;
}
