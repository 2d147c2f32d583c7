//! # Repository Port
//!
//! Port definition for persistence abstraction.
//!
//! The [`CatalogRepository`] trait abstracts the two relations backing
//! the catalog (`venues`, `events`) behind one port, so the composed
//! event/venue reads can run inside a single backend transaction.
//! Implementations exist for PostgreSQL and in-memory storage.
//!
//! # Examples
//!
//! ```ignore
//! use venue_events::infrastructure::persistence::traits::CatalogRepository;
//!
//! async fn count_composed(repo: &impl CatalogRepository) {
//!     let events = repo.list_events().await.unwrap();
//!     println!("{} composed events", events.len());
//! }
//! ```

use crate::domain::entities::{ComposedEvent, EventDraft, Venue, VenueDraft};
use crate::domain::value_objects::{EventId, VenueId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),

    /// Row-to-entity conversion error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for the event/venue catalog.
///
/// Covers both relations behind one port: the composed reads span the
/// two tables and need a consistent snapshot, which per-table ports
/// cannot provide.
///
/// Absence is reported in-band (`Option` for reads, `bool` for writes);
/// [`RepositoryError`] is reserved for backend failures.
#[async_trait]
pub trait CatalogRepository: Send + Sync + fmt::Debug {
    /// Inserts a venue and an event referencing it, in one transaction.
    ///
    /// Both ids are generated by the backend. The venue insert runs
    /// first so its returned id can be bound as the event's reference.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if either insert fails; neither row
    /// is persisted in that case.
    async fn insert_event(
        &self,
        venue: &VenueDraft,
        event: &EventDraft,
    ) -> RepositoryResult<(VenueId, EventId)>;

    /// Gets the composed event/venue view by event id.
    ///
    /// Returns `None` if the event does not exist. A missing venue row
    /// yields a composed view with `venue: None`, not an error. Both
    /// reads run inside one transaction so the pair is a consistent
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the backend fails.
    async fn get_event(&self, id: &EventId) -> RepositoryResult<Option<ComposedEvent>>;

    /// Gets all events with their venues attached.
    ///
    /// The venue of each event is fetched individually inside the same
    /// transaction, preserving the source's per-row lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the backend fails.
    async fn list_events(&self) -> RepositoryResult<Vec<ComposedEvent>>;

    /// Gets a venue by id.
    ///
    /// Returns `None` if the venue does not exist.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the backend fails.
    async fn get_venue(&self, id: &VenueId) -> RepositoryResult<Option<Venue>>;

    /// Updates a venue row, addressed by the venue's own id.
    ///
    /// Returns `Ok(true)` if a row was updated, `Ok(false)` if no venue
    /// matched the id.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the backend fails.
    async fn update_venue(&self, venue: &Venue) -> RepositoryResult<bool>;

    /// Deletes an event by id, leaving its venue untouched.
    ///
    /// Returns `Ok(true)` if the event was deleted, `Ok(false)` if it
    /// didn't exist.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the backend fails.
    async fn delete_event(&self, id: &EventId) -> RepositoryResult<bool>;
}
