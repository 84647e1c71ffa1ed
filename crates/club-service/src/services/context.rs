//! Service context - dependency container for services
//!
//! Holds the RSVP store, the event catalog, the clock and calendar settings.
//! Everything is passed in explicitly; nothing is read from process globals.

use std::future::Future;
use std::sync::Arc;

use club_common::CalendarConfig;
use club_core::error::DomainError;
use club_core::traits::{Clock, EventCatalog, RepoResult, RsvpRepository, SystemClock};
use club_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent when running against in-memory stores
    pool: Option<PgPool>,

    // Stores
    rsvp_repo: Arc<dyn RsvpRepository>,
    event_catalog: Arc<dyn EventCatalog>,

    clock: Arc<dyn Clock>,
    calendar: CalendarConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        rsvp_repo: Arc<dyn RsvpRepository>,
        event_catalog: Arc<dyn EventCatalog>,
        clock: Arc<dyn Clock>,
        calendar: CalendarConfig,
    ) -> Self {
        Self {
            pool,
            rsvp_repo,
            event_catalog,
            clock,
            calendar,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if one is configured
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Stores ===

    /// Get the RSVP repository
    pub fn rsvp_repo(&self) -> &dyn RsvpRepository {
        self.rsvp_repo.as_ref()
    }

    /// Get the event catalog
    pub fn event_catalog(&self) -> &dyn EventCatalog {
        self.event_catalog.as_ref()
    }

    // === Time & Settings ===

    /// Get the clock
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Get the calendar settings
    pub fn calendar(&self) -> &CalendarConfig {
        &self.calendar
    }

    /// Run a store call under the configured timeout
    ///
    /// An elapsed timeout is reported as a transient failure; the call is not
    /// retried.
    pub async fn store_call<T, F>(&self, call: F) -> ServiceResult<T>
    where
        F: Future<Output = RepoResult<T>>,
    {
        match tokio::time::timeout(self.calendar.store_timeout(), call).await {
            Ok(result) => result.map_err(ServiceError::from),
            Err(_) => Err(DomainError::Timeout(self.calendar.store_timeout_ms).into()),
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("stores", &"...")
            .field("calendar", &self.calendar)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    rsvp_repo: Option<Arc<dyn RsvpRepository>>,
    event_catalog: Option<Arc<dyn EventCatalog>>,
    clock: Option<Arc<dyn Clock>>,
    calendar: Option<CalendarConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn rsvp_repo(mut self, repo: Arc<dyn RsvpRepository>) -> Self {
        self.rsvp_repo = Some(repo);
        self
    }

    pub fn event_catalog(mut self, catalog: Arc<dyn EventCatalog>) -> Self {
        self.event_catalog = Some(catalog);
        self
    }

    /// Defaults to the system clock
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Defaults to `CalendarConfig::default()`
    pub fn calendar(mut self, calendar: CalendarConfig) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool,
            self.rsvp_repo
                .ok_or_else(|| ServiceError::validation("rsvp_repo is required"))?,
            self.event_catalog
                .ok_or_else(|| ServiceError::validation("event_catalog is required"))?,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.calendar.unwrap_or_default(),
        ))
    }
}
