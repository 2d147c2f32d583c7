//! # Nested Value Types
//!
//! The sub-objects carried inside venue and event records.
//!
//! These types mirror the nested JSON wire format one-to-one, so every
//! field is renamed to camelCase for serialization. Coordinates are kept
//! as strings: that is how the wire format carries them, and the service
//! never does arithmetic on them.

use serde::{Deserialize, Serialize};

/// Geographic coordinates of a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    /// Latitude, as carried on the wire.
    pub latitude: String,
    /// Longitude, as carried on the wire.
    pub longitude: String,
}

/// Phone/email contact pair.
///
/// Shared by venues and event organizers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Contact phone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
}

/// Free-form descriptions of a venue's amenities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facilities {
    /// Parking availability.
    pub parking: String,
    /// Accessibility provisions.
    pub accessibility: String,
    /// Food and beverage options.
    pub food_and_beverage: String,
    /// Restroom availability.
    pub restrooms: String,
}

/// Ticketing details for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketInfo {
    /// Ticket price, as carried on the wire.
    pub price: String,
    /// Availability description.
    pub availability: String,
    /// Link to the ticket purchase page.
    pub purchase_link: String,
}

/// Entry requirements for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequirements {
    /// Whether photo id is required at the door.
    pub id_required: bool,
    /// Whether mobile tickets are accepted.
    pub mobile_entry: bool,
    /// Whether print-at-home tickets are accepted.
    pub print_at_home: bool,
}

/// Refund policy for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundPolicy {
    /// How long before the event refunds are accepted.
    pub time_limit: String,
    /// Conditions under which refunds are granted.
    pub conditions: String,
}

/// The organizer of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    /// Organizer name.
    pub name: String,
    /// Organizer contact details.
    pub contact: ContactInfo,
}
