//! PostgreSQL-backed [`PortfolioStore`].

use async_trait::async_trait;
use folio_core::types::DbId;

use crate::models::booking::{Booking, CreateBooking};
use crate::models::project::{Project, ProjectInput};
use crate::repositories::{BookingRepo, ProjectRepo};
use crate::store::{PortfolioStore, StoreError};
use crate::DbPool;

/// Store that delegates every call to the sqlx repositories.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioStore for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn find_project(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_project(&self, input: &ProjectInput) -> Result<Project, StoreError> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &ProjectInput,
    ) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_project(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, StoreError> {
        Ok(BookingRepo::list(&self.pool).await?)
    }

    async fn create_booking(&self, input: &CreateBooking) -> Result<Booking, StoreError> {
        Ok(BookingRepo::create(&self.pool, input).await?)
    }

    async fn update_booking_status(
        &self,
        id: DbId,
        status: &str,
    ) -> Result<Option<Booking>, StoreError> {
        Ok(BookingRepo::update_status(&self.pool, id, status).await?)
    }
}
