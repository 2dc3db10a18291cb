//! In-process [`PortfolioStore`] backing the API test-suite.

use async_trait::async_trait;
use chrono::Utc;
use folio_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::booking::{Booking, CreateBooking, NEW_BOOKING_STATUS};
use crate::models::project::{Project, ProjectInput};
use crate::store::{PortfolioStore, StoreError};

#[derive(Default)]
struct Tables {
    // Insertion order; listing reverses it before sorting so equal
    // timestamps still come back newest first.
    projects: Vec<Project>,
    bookings: Vec<Booking>,
    fault: Option<String>,
}

impl Tables {
    fn check(&self) -> Result<(), StoreError> {
        match &self.fault {
            Some(message) => Err(StoreError::Rejected(message.clone())),
            None => Ok(()),
        }
    }
}

/// Vec-backed store guarded by a single async lock.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with `message` until
    /// [`MemoryStore::clear_fault`] is called.
    pub async fn inject_fault(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(fault = %message, "Memory store will reject operations");
        self.tables.write().await.fault = Some(message);
    }

    pub async fn clear_fault(&self) {
        self.tables.write().await.fault = None;
    }
}

fn newest_first<T: Clone>(rows: &[T], created_at: impl Fn(&T) -> Timestamp) -> Vec<T> {
    let mut out: Vec<T> = rows.iter().rev().cloned().collect();
    out.sort_by_key(|row| std::cmp::Reverse(created_at(row)));
    out
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.tables.read().await.check()
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let tables = self.tables.read().await;
        tables.check()?;
        Ok(newest_first(&tables.projects, |p| p.created_at))
    }

    async fn find_project(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        let tables = self.tables.read().await;
        tables.check()?;
        Ok(tables.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn create_project(&self, input: &ProjectInput) -> Result<Project, StoreError> {
        let mut tables = self.tables.write().await;
        tables.check()?;
        let project = Project {
            id: Uuid::new_v4(),
            title: input.title.clone(),
            category: input.category.clone(),
            media_url: input.media_url.clone(),
            thumbnail_url: input.thumbnail_url.clone(),
            created_at: Utc::now(),
        };
        tables.projects.push(project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &ProjectInput,
    ) -> Result<Option<Project>, StoreError> {
        let mut tables = self.tables.write().await;
        tables.check()?;
        let Some(project) = tables.projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        project.title = input.title.clone();
        project.category = input.category.clone();
        project.media_url = input.media_url.clone();
        project.thumbnail_url = input.thumbnail_url.clone();
        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        tables.check()?;
        let before = tables.projects.len();
        tables.projects.retain(|p| p.id != id);
        Ok(tables.projects.len() < before)
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, StoreError> {
        let tables = self.tables.read().await;
        tables.check()?;
        Ok(newest_first(&tables.bookings, |b| b.created_at))
    }

    async fn create_booking(&self, input: &CreateBooking) -> Result<Booking, StoreError> {
        let mut tables = self.tables.write().await;
        tables.check()?;
        let booking = Booking {
            id: Uuid::new_v4(),
            client_name: input.client_name.clone(),
            client_email: input.client_email.clone(),
            event_date: input.event_date,
            service_type: input.service_type.clone(),
            message: input.message.clone(),
            status: NEW_BOOKING_STATUS.to_string(),
            created_at: Utc::now(),
        };
        tables.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn update_booking_status(
        &self,
        id: DbId,
        status: &str,
    ) -> Result<Option<Booking>, StoreError> {
        let mut tables = self.tables.write().await;
        tables.check()?;
        let Some(booking) = tables.bookings.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        booking.status = status.to_string();
        Ok(Some(booking.clone()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn project(title: &str) -> ProjectInput {
        ProjectInput {
            title: Some(title.to_string()),
            category: Some("Photography".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn projects_list_newest_first() {
        let store = MemoryStore::new();
        for title in ["first", "second", "third"] {
            store.create_project(&project(title)).await.unwrap();
        }

        let titles: Vec<_> = store
            .list_projects()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title.unwrap())
            .collect();
        assert_eq!(titles, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn update_overwrites_every_column() {
        let store = MemoryStore::new();
        let created = store
            .create_project(&ProjectInput {
                title: Some("Wedding".to_string()),
                category: Some("Photography".to_string()),
                media_url: Some("https://media/a.jpg".to_string()),
                thumbnail_url: Some("https://media/a_t.jpg".to_string()),
            })
            .await
            .unwrap();

        let updated = store
            .update_project(created.id, &project("Renamed"))
            .await
            .unwrap()
            .expect("row exists");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title.as_deref(), Some("Renamed"));
        assert_eq!(updated.media_url, None);
        assert_eq!(updated.thumbnail_url, None);
    }

    #[tokio::test]
    async fn missing_rows_are_none() {
        let store = MemoryStore::new();
        let id = Uuid::new_v4();
        assert!(store.find_project(id).await.unwrap().is_none());
        assert!(store.update_project(id, &project("x")).await.unwrap().is_none());
        assert!(!store.delete_project(id).await.unwrap());
        assert!(store.update_booking_status(id, "Done").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn booking_status_update_leaves_other_fields() {
        let store = MemoryStore::new();
        let booking = store
            .create_booking(&CreateBooking {
                client_name: Some("Jane".to_string()),
                client_email: Some("jane@x.com".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(booking.status, "New");

        let updated = store
            .update_booking_status(booking.id, "Confirmed")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, "Confirmed");
        assert_eq!(updated.client_name, booking.client_name);
        assert_eq!(updated.client_email, booking.client_email);
        assert_eq!(updated.created_at, booking.created_at);
    }

    #[tokio::test]
    async fn injected_fault_rejects_until_cleared() {
        let store = MemoryStore::new();
        store.inject_fault("relation \"projects\" does not exist").await;

        let err = store.list_projects().await.unwrap_err();
        assert_matches!(err, StoreError::Rejected(ref msg) if msg.contains("projects"));
        assert_matches!(store.ping().await, Err(StoreError::Rejected(_)));

        store.clear_fault().await;
        assert!(store.list_projects().await.unwrap().is_empty());
    }
}
