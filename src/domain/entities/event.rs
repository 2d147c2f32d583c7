//! # Event Entity
//!
//! A scheduled occurrence tied to exactly one venue.
//!
//! Every event references an existing venue by id; the nested JSON view
//! served over HTTP is composed at read time from the event row and its
//! venue row ([`ComposedEvent`]), never stored denormalized.

use crate::domain::entities::venue::Venue;
use crate::domain::value_objects::{
    EntryRequirements, EventId, Organizer, RefundPolicy, TicketInfo, VenueId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Backend-generated identifier.
    pub id: EventId,
    /// The venue hosting this event.
    pub venue_id: VenueId,
    /// Event category, free-form ("concert", "exhibition", ...).
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event name.
    pub name: String,
    /// Scheduled start, UTC.
    pub date_time: DateTime<Utc>,
    /// Age restriction, free-form.
    pub age_restriction: String,
    /// Ticketing details.
    pub ticket_info: TicketInfo,
    /// Entry requirements.
    pub entry_requirements: EntryRequirements,
    /// Refund policy.
    pub refund_policy: RefundPolicy,
    /// Event organizer.
    pub organizer: Organizer,
}

/// Event fields without an identifier or venue reference.
///
/// The shape accepted on create; the venue reference is supplied by the
/// repository once the venue insert has returned its generated id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    /// Event category, free-form.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event name.
    pub name: String,
    /// Scheduled start, UTC.
    pub date_time: DateTime<Utc>,
    /// Age restriction, free-form.
    pub age_restriction: String,
    /// Ticketing details.
    pub ticket_info: TicketInfo,
    /// Entry requirements.
    pub entry_requirements: EntryRequirements,
    /// Refund policy.
    pub refund_policy: RefundPolicy,
    /// Event organizer.
    pub organizer: Organizer,
}

impl EventDraft {
    /// Attaches identifiers to the draft, producing a full event record.
    #[must_use]
    pub fn into_event(self, id: EventId, venue_id: VenueId) -> Event {
        Event {
            id,
            venue_id,
            event_type: self.event_type,
            name: self.name,
            date_time: self.date_time,
            age_restriction: self.age_restriction,
            ticket_info: self.ticket_info,
            entry_requirements: self.entry_requirements,
            refund_policy: self.refund_policy,
            organizer: self.organizer,
        }
    }
}

/// The composed view of an event joined with its venue.
///
/// `venue` is `None` when the referenced venue row is missing at read
/// time; the composed view reports that as a null venue rather than an
/// error, so a dangling reference never hides the event itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedEvent {
    /// The event record.
    pub event: Event,
    /// The venue referenced by `event.venue_id`, if it still exists.
    pub venue: Option<Venue>,
}
