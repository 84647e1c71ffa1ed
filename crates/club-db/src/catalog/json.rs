//! Static JSON-file event catalog
//!
//! The file holds a JSON array of events. Field names may be snake_case or the
//! camelCase used by the public site (`registrationLink`, `repeatInterval`).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use club_core::entities::Event;
use club_core::error::DomainError;
use club_core::traits::{EventCatalog, RepoResult};

/// Event catalog loaded once from a JSON file
#[derive(Debug, Clone)]
pub struct JsonEventCatalog {
    source: Option<PathBuf>,
    events: Arc<[Event]>,
}

impl JsonEventCatalog {
    /// Load and validate the catalog at `path`
    ///
    /// # Errors
    /// Returns `CatalogError` if the file cannot be read or parsed, or the
    /// underlying validation error if an event is malformed.
    #[instrument]
    pub async fn load(path: &Path) -> RepoResult<Self> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::CatalogError(format!("Failed to read {}: {e}", path.display()))
        })?;

        let mut catalog = Self::from_json(&raw)?;
        catalog.source = Some(path.to_path_buf());
        info!(events = catalog.events.len(), "Loaded event catalog");
        Ok(catalog)
    }

    /// Parse and validate a catalog from a JSON string
    pub fn from_json(raw: &str) -> RepoResult<Self> {
        let events: Vec<Event> = serde_json::from_str(raw)
            .map_err(|e| DomainError::CatalogError(format!("Malformed event catalog: {e}")))?;
        Self::from_events(events)
    }

    /// Build a catalog from already-constructed events
    pub fn from_events(events: Vec<Event>) -> RepoResult<Self> {
        for event in &events {
            event.validate()?;
        }
        Ok(Self {
            source: None,
            events: events.into(),
        })
    }

    /// Path the catalog was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

#[async_trait]
impl EventCatalog for JsonEventCatalog {
    async fn list_events(&self) -> RepoResult<Vec<Event>> {
        Ok(self.events.to_vec())
    }
}
