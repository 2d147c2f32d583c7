//! # Venue Entity
//!
//! A physical location hosting one or more events.
//!
//! Venues are owned independently of events: an event references exactly
//! one venue by id, and deleting an event never touches its venue. The
//! identifier is generated by the backend, so a venue that has not been
//! persisted yet is represented by [`VenueDraft`] instead of carrying a
//! placeholder id.
//!
//! # Examples
//!
//! ```
//! use venue_events::domain::entities::venue::VenueDraft;
//! use venue_events::domain::value_objects::{ContactInfo, Facilities, GeoPoint};
//!
//! let draft = VenueDraft {
//!     name: "Hall A".to_string(),
//!     operation_hours: "09:00-23:00".to_string(),
//!     address: "1 Concert Way".to_string(),
//!     geo: GeoPoint {
//!         latitude: "37.5665".to_string(),
//!         longitude: "126.9780".to_string(),
//!     },
//!     contact: ContactInfo {
//!         phone: "+82-2-000-0000".to_string(),
//!         email: "hall-a@example.com".to_string(),
//!     },
//!     facilities: Facilities {
//!         parking: "on-site".to_string(),
//!         accessibility: "step-free".to_string(),
//!         food_and_beverage: "kiosks".to_string(),
//!         restrooms: "all floors".to_string(),
//!     },
//! };
//!
//! assert_eq!(draft.name, "Hall A");
//! ```

use crate::domain::value_objects::{ContactInfo, Facilities, GeoPoint, VenueId};
use serde::{Deserialize, Serialize};

/// A persisted venue record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Backend-generated identifier.
    pub id: VenueId,
    /// Venue name.
    pub name: String,
    /// Opening hours, free-form.
    pub operation_hours: String,
    /// Street address.
    pub address: String,
    /// Geographic coordinates.
    pub geo: GeoPoint,
    /// Venue contact details.
    pub contact: ContactInfo,
    /// Amenity descriptions.
    pub facilities: Facilities,
}

impl Venue {
    /// Splits this venue into its id and draft fields.
    ///
    /// Useful when re-submitting an existing venue's fields as an update.
    #[must_use]
    pub fn into_parts(self) -> (VenueId, VenueDraft) {
        (
            self.id,
            VenueDraft {
                name: self.name,
                operation_hours: self.operation_hours,
                address: self.address,
                geo: self.geo,
                contact: self.contact,
                facilities: self.facilities,
            },
        )
    }

    /// Rebuilds a venue from an id and draft fields.
    #[must_use]
    pub fn from_parts(id: VenueId, draft: VenueDraft) -> Self {
        Self {
            id,
            name: draft.name,
            operation_hours: draft.operation_hours,
            address: draft.address,
            geo: draft.geo,
            contact: draft.contact,
            facilities: draft.facilities,
        }
    }
}

/// Venue fields without an identifier.
///
/// This is the shape accepted on create, before the backend has handed
/// back a generated id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueDraft {
    /// Venue name.
    pub name: String,
    /// Opening hours, free-form.
    pub operation_hours: String,
    /// Street address.
    pub address: String,
    /// Geographic coordinates.
    pub geo: GeoPoint,
    /// Venue contact details.
    pub contact: ContactInfo,
    /// Amenity descriptions.
    pub facilities: Facilities,
}
