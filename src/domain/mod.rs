//! # Domain Layer
//!
//! Entities and value objects for the event/venue catalog.
//!
//! This layer has no knowledge of HTTP or the database; it only defines
//! the record shapes and the composed event/venue view.

pub mod entities;
pub mod value_objects;
