//! PostgreSQL implementation of EventCatalog

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use club_core::entities::Event;
use club_core::traits::{EventCatalog, RepoResult};

use crate::models::EventModel;

use super::error::map_db_error;

/// Event catalog backed by the `events` table
#[derive(Clone)]
pub struct PgEventCatalog {
    pool: PgPool,
}

impl PgEventCatalog {
    /// Create a new PgEventCatalog
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventCatalog for PgEventCatalog {
    #[instrument(skip(self))]
    async fn list_events(&self) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT id, name, date, time, description, location, image,
                   registration_link, repeat_interval_days
            FROM events
            ORDER BY date ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        debug!(count = results.len(), "Loaded events from database");
        Ok(results.into_iter().map(Event::from).collect())
    }
}
