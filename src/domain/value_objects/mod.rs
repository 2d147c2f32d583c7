//! # Value Objects
//!
//! Immutable types with domain semantics.
//!
//! ## Identity Types
//!
//! - [`VenueId`], [`EventId`]: UUID-based identifiers, generated by the
//!   backend on insert
//!
//! ## Nested Value Types
//!
//! - [`GeoPoint`]: latitude/longitude pair
//! - [`ContactInfo`]: phone/email pair, shared by venues and organizers
//! - [`Facilities`]: venue amenity descriptions
//! - [`TicketInfo`], [`EntryRequirements`], [`RefundPolicy`],
//!   [`Organizer`]: event sub-objects

pub mod ids;
pub mod nested;

pub use ids::{EventId, VenueId};
pub use nested::{
    ContactInfo, EntryRequirements, Facilities, GeoPoint, Organizer, RefundPolicy, TicketInfo,
};
