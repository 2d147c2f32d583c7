//! # In-Memory Catalog Repository
//!
//! In-memory implementation of [`CatalogRepository`] for testing.
//!
//! Both maps live behind a single `RwLock`, so every operation sees the
//! two tables as one snapshot, mirroring the transactional reads of the
//! PostgreSQL implementation.

use crate::domain::entities::venue::{Venue, VenueDraft};
use crate::domain::entities::{ComposedEvent, Event, EventDraft};
use crate::domain::value_objects::{EventId, VenueId};
use crate::infrastructure::persistence::traits::{CatalogRepository, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct CatalogState {
    venues: HashMap<VenueId, Venue>,
    events: HashMap<EventId, Event>,
}

/// In-memory implementation of [`CatalogRepository`].
///
/// Uses thread-safe `HashMap`s for storage. Suitable for unit tests
/// without database dependencies. Ids are generated client-side since
/// there is no backend to generate them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryCatalogRepository {
    /// Creates a new empty in-memory catalog repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored events.
    pub async fn event_count(&self) -> usize {
        self.state.read().await.events.len()
    }

    /// Returns the number of stored venues.
    pub async fn venue_count(&self) -> usize {
        self.state.read().await.venues.len()
    }

    /// Removes a venue directly, bypassing the public operations.
    ///
    /// Lets tests fabricate a dangling event/venue reference, which the
    /// public surface cannot produce.
    pub async fn remove_venue(&self, id: &VenueId) -> bool {
        self.state.write().await.venues.remove(id).is_some()
    }

    /// Clears all stored records.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.venues.clear();
        state.events.clear();
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn insert_event(
        &self,
        venue: &VenueDraft,
        event: &EventDraft,
    ) -> RepositoryResult<(VenueId, EventId)> {
        let mut state = self.state.write().await;

        let venue_id = VenueId::generate();
        let event_id = EventId::generate();

        state
            .venues
            .insert(venue_id, Venue::from_parts(venue_id, venue.clone()));
        state
            .events
            .insert(event_id, event.clone().into_event(event_id, venue_id));

        Ok((venue_id, event_id))
    }

    async fn get_event(&self, id: &EventId) -> RepositoryResult<Option<ComposedEvent>> {
        let state = self.state.read().await;

        let Some(event) = state.events.get(id).cloned() else {
            return Ok(None);
        };

        let venue = state.venues.get(&event.venue_id).cloned();
        Ok(Some(ComposedEvent { event, venue }))
    }

    async fn list_events(&self) -> RepositoryResult<Vec<ComposedEvent>> {
        let state = self.state.read().await;

        let mut composed: Vec<ComposedEvent> = state
            .events
            .values()
            .map(|event| ComposedEvent {
                venue: state.venues.get(&event.venue_id).cloned(),
                event: event.clone(),
            })
            .collect();

        // HashMap iteration order is arbitrary; match the backend's ordering.
        composed.sort_by_key(|c| c.event.date_time);
        Ok(composed)
    }

    async fn get_venue(&self, id: &VenueId) -> RepositoryResult<Option<Venue>> {
        let state = self.state.read().await;
        Ok(state.venues.get(id).cloned())
    }

    async fn update_venue(&self, venue: &Venue) -> RepositoryResult<bool> {
        let mut state = self.state.write().await;

        match state.venues.get_mut(&venue.id) {
            Some(stored) => {
                *stored = venue.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_event(&self, id: &EventId) -> RepositoryResult<bool> {
        let mut state = self.state.write().await;
        Ok(state.events.remove(id).is_some())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{
        ContactInfo, EntryRequirements, Facilities, GeoPoint, Organizer, RefundPolicy, TicketInfo,
    };
    use chrono::{TimeZone, Utc};

    fn venue_draft(name: &str) -> VenueDraft {
        VenueDraft {
            name: name.to_string(),
            operation_hours: "10:00-22:00".to_string(),
            address: "1 Concert Way".to_string(),
            geo: GeoPoint {
                latitude: "37.5665".to_string(),
                longitude: "126.9780".to_string(),
            },
            contact: ContactInfo {
                phone: "+82-2-000-0000".to_string(),
                email: "venue@example.com".to_string(),
            },
            facilities: Facilities {
                parking: "on-site".to_string(),
                accessibility: "step-free".to_string(),
                food_and_beverage: "kiosks".to_string(),
                restrooms: "all floors".to_string(),
            },
        }
    }

    fn event_draft(name: &str, hour: u32) -> EventDraft {
        EventDraft {
            event_type: "concert".to_string(),
            name: name.to_string(),
            date_time: Utc.with_ymd_and_hms(2026, 4, 18, hour, 0, 0).unwrap(),
            age_restriction: "all".to_string(),
            ticket_info: TicketInfo {
                price: "30000".to_string(),
                availability: "on sale".to_string(),
                purchase_link: "https://tickets.example.com".to_string(),
            },
            entry_requirements: EntryRequirements {
                id_required: false,
                mobile_entry: true,
                print_at_home: true,
            },
            refund_policy: RefundPolicy {
                time_limit: "24h".to_string(),
                conditions: "full refund".to_string(),
            },
            organizer: Organizer {
                name: "Riverside Productions".to_string(),
                contact: ContactInfo {
                    phone: "+82-2-111-1111".to_string(),
                    email: "ops@example.com".to_string(),
                },
            },
        }
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryCatalogRepository::new();
        assert_eq!(repo.event_count().await, 0);
        assert_eq!(repo.venue_count().await, 0);
        assert!(repo.list_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_and_get_composed() {
        let repo = InMemoryCatalogRepository::new();
        let (venue_id, event_id) = repo
            .insert_event(&venue_draft("Hall A"), &event_draft("Opening", 19))
            .await
            .unwrap();

        let composed = repo.get_event(&event_id).await.unwrap().unwrap();
        assert_eq!(composed.event.id, event_id);
        assert_eq!(composed.event.venue_id, venue_id);
        assert_eq!(composed.venue.unwrap().name, "Hall A");
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let repo = InMemoryCatalogRepository::new();
        let missing = repo.get_event(&EventId::generate()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn list_is_ordered_by_date_time() {
        let repo = InMemoryCatalogRepository::new();
        repo.insert_event(&venue_draft("B"), &event_draft("Late", 21))
            .await
            .unwrap();
        repo.insert_event(&venue_draft("A"), &event_draft("Early", 11))
            .await
            .unwrap();

        let listed = repo.list_events().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].event.name, "Early");
        assert_eq!(listed[1].event.name, "Late");
    }

    #[tokio::test]
    async fn update_missing_venue_reports_false() {
        let repo = InMemoryCatalogRepository::new();
        let venue = Venue::from_parts(VenueId::generate(), venue_draft("Ghost"));
        assert!(!repo.update_venue(&venue).await.unwrap());
    }

    #[tokio::test]
    async fn delete_event_leaves_venue() {
        let repo = InMemoryCatalogRepository::new();
        let (venue_id, event_id) = repo
            .insert_event(&venue_draft("Hall A"), &event_draft("Opening", 19))
            .await
            .unwrap();

        assert!(repo.delete_event(&event_id).await.unwrap());
        assert!(repo.get_event(&event_id).await.unwrap().is_none());
        assert!(repo.get_venue(&venue_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn removed_venue_yields_null_in_composed_view() {
        let repo = InMemoryCatalogRepository::new();
        let (venue_id, event_id) = repo
            .insert_event(&venue_draft("Hall A"), &event_draft("Opening", 19))
            .await
            .unwrap();

        assert!(repo.remove_venue(&venue_id).await);

        let composed = repo.get_event(&event_id).await.unwrap().unwrap();
        assert!(composed.venue.is_none());
    }
}
