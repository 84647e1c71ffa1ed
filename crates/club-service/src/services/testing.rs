//! In-memory stores for service tests

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use club_core::entities::{Event, Rsvp, RsvpStatus};
use club_core::error::DomainError;
use club_core::traits::{EventCatalog, RepoResult, RsvpRepository};

/// RSVP store with the same uniqueness and ownership rules as the Postgres one
#[derive(Default)]
pub struct InMemoryRsvpRepository {
    rows: Mutex<Vec<Rsvp>>,
}

impl InMemoryRsvpRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl RsvpRepository for InMemoryRsvpRepository {
    async fn find_for_member(&self, member_id: Uuid, rsvp_id: Uuid) -> RepoResult<Option<Rsvp>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| r.id == rsvp_id && r.member_id == member_id)
            .cloned())
    }

    async fn find_active(
        &self,
        member_id: Uuid,
        event_name: &str,
        event_date: NaiveDate,
    ) -> RepoResult<Option<Rsvp>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| {
                r.member_id == member_id
                    && r.event_name == event_name
                    && r.event_date == event_date
                    && r.is_active()
            })
            .cloned())
    }

    async fn find_by_member(
        &self,
        member_id: Uuid,
        status: Option<RsvpStatus>,
    ) -> RepoResult<Vec<Rsvp>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| r.member_id == member_id && status.map_or(true, |s| r.status == s))
            .cloned()
            .collect())
    }

    async fn create(&self, rsvp: &Rsvp) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let duplicate = rows.iter().any(|r| {
            r.member_id == rsvp.member_id
                && r.event_name == rsvp.event_name
                && r.event_date == rsvp.event_date
                && r.is_active()
        });
        if duplicate {
            return Err(DomainError::RsvpAlreadyExists {
                event_name: rsvp.event_name.clone(),
                event_date: rsvp.event_date,
            });
        }
        rows.push(rsvp.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        member_id: Uuid,
        rsvp_id: Uuid,
        status: RsvpStatus,
    ) -> RepoResult<Option<Rsvp>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows
            .iter_mut()
            .find(|r| r.id == rsvp_id && r.member_id == member_id)
            .map(|r| {
                r.status = status;
                r.clone()
            }))
    }

    async fn delete(&self, member_id: Uuid, rsvp_id: Uuid) -> RepoResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.id == rsvp_id && r.member_id == member_id));
        Ok(rows.len() < before)
    }
}

/// RSVP store whose active-RSVP lookup always misses, as when a concurrent
/// insert lands between the check and the write
#[derive(Default)]
pub struct StaleReadRsvpRepository {
    inner: InMemoryRsvpRepository,
}

impl StaleReadRsvpRepository {
    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

#[async_trait]
impl RsvpRepository for StaleReadRsvpRepository {
    async fn find_for_member(&self, member_id: Uuid, rsvp_id: Uuid) -> RepoResult<Option<Rsvp>> {
        self.inner.find_for_member(member_id, rsvp_id).await
    }

    async fn find_active(&self, _: Uuid, _: &str, _: NaiveDate) -> RepoResult<Option<Rsvp>> {
        Ok(None)
    }

    async fn find_by_member(
        &self,
        member_id: Uuid,
        status: Option<RsvpStatus>,
    ) -> RepoResult<Vec<Rsvp>> {
        self.inner.find_by_member(member_id, status).await
    }

    async fn create(&self, rsvp: &Rsvp) -> RepoResult<()> {
        self.inner.create(rsvp).await
    }

    async fn update_status(
        &self,
        member_id: Uuid,
        rsvp_id: Uuid,
        status: RsvpStatus,
    ) -> RepoResult<Option<Rsvp>> {
        self.inner.update_status(member_id, rsvp_id, status).await
    }

    async fn delete(&self, member_id: Uuid, rsvp_id: Uuid) -> RepoResult<bool> {
        self.inner.delete(member_id, rsvp_id).await
    }
}

/// Fixed list of events
#[derive(Default)]
pub struct InMemoryCatalog {
    events: Vec<Event>,
}

impl InMemoryCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl EventCatalog for InMemoryCatalog {
    async fn list_events(&self) -> RepoResult<Vec<Event>> {
        Ok(self.events.clone())
    }
}

/// Catalog whose backend is down
pub struct UnavailableCatalog;

#[async_trait]
impl EventCatalog for UnavailableCatalog {
    async fn list_events(&self) -> RepoResult<Vec<Event>> {
        Err(DomainError::StoreUnavailable("connection refused".to_string()))
    }
}
