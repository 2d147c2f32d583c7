//! # Event/Venue Store
//!
//! The data-access facade over the two related record types.
//!
//! [`EventVenueStore`] owns the event/venue consistency contract: a
//! normalized relational representation serving a denormalized nested
//! JSON view. It holds the repository port injected at construction and
//! translates in-band absence (`None`/`false`) into `NotFound`.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use venue_events::application::store::EventVenueStore;
//! use venue_events::infrastructure::persistence::InMemoryCatalogRepository;
//!
//! let store = EventVenueStore::new(Arc::new(InMemoryCatalogRepository::new()));
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::venue::{Venue, VenueDraft};
use crate::domain::entities::{ComposedEvent, EventDraft};
use crate::domain::value_objects::{EventId, VenueId};
use crate::infrastructure::persistence::CatalogRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Data-access facade over venues and events.
///
/// Each operation is a single repository call; the repository decides
/// how many statements that takes and whether they share a transaction.
#[derive(Debug, Clone)]
pub struct EventVenueStore {
    repository: Arc<dyn CatalogRepository>,
}

impl EventVenueStore {
    /// Creates a store over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// Creates an event together with its venue.
    ///
    /// The venue row is inserted first and its generated id becomes the
    /// event's venue reference; both inserts share one transaction, so
    /// an event can never be created pointing at a venue that failed to
    /// persist.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Repository`] on backend failure.
    pub async fn create_event(
        &self,
        venue: VenueDraft,
        event: EventDraft,
    ) -> ApplicationResult<(VenueId, EventId)> {
        let (venue_id, event_id) = self.repository.insert_event(&venue, &event).await?;
        info!(%venue_id, %event_id, "event created");
        Ok((venue_id, event_id))
    }

    /// Gets the composed event/venue view by event id.
    ///
    /// A missing venue row does not fail the read; the composed view
    /// carries `venue: None` in that case.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] if no event matches the
    /// id, [`ApplicationError::Repository`] on backend failure.
    pub async fn get_event(&self, id: EventId) -> ApplicationResult<ComposedEvent> {
        self.repository
            .get_event(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Event", id.to_string()))
    }

    /// Lists all events with their venues attached.
    ///
    /// The sequence is fully materialized before returning.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Repository`] on backend failure.
    pub async fn list_events(&self) -> ApplicationResult<Vec<ComposedEvent>> {
        let events = self.repository.list_events().await?;
        debug!(count = events.len(), "listed events");
        Ok(events)
    }

    /// Updates a venue's fields, addressed by the venue's own id.
    ///
    /// Event rows are not touched; the event observes the change through
    /// the composed view.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] if no venue matches the
    /// id, [`ApplicationError::Repository`] on backend failure.
    pub async fn update_event(&self, venue: Venue) -> ApplicationResult<()> {
        let venue_id = venue.id;
        if self.repository.update_venue(&venue).await? {
            info!(%venue_id, "venue updated");
            Ok(())
        } else {
            Err(ApplicationError::not_found("Venue", venue_id.to_string()))
        }
    }

    /// Deletes an event by id.
    ///
    /// The associated venue is intentionally left in place; venues are
    /// owned independently of the events that reference them.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] if no event matches the
    /// id, [`ApplicationError::Repository`] on backend failure.
    pub async fn delete_event(&self, id: EventId) -> ApplicationResult<()> {
        if self.repository.delete_event(&id).await? {
            info!(event_id = %id, "event deleted");
            Ok(())
        } else {
            Err(ApplicationError::not_found("Event", id.to_string()))
        }
    }
}
