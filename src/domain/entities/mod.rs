//! # Domain Entities
//!
//! The two record types the service persists, plus the composed view
//! served over HTTP.
//!
//! - [`Venue`]: a physical location, owned independently of events
//! - [`Event`]: a scheduled occurrence referencing exactly one venue
//! - [`ComposedEvent`]: an event joined with its venue at read time

pub mod event;
pub mod venue;

pub use event::{ComposedEvent, Event, EventDraft};
pub use venue::{Venue, VenueDraft};
