//! # venue-events
//!
//! Event and venue catalog service exposing a nested JSON CRUD API over
//! PostgreSQL.
//!
//! The service persists a normalized relational representation (two
//! tables, `venues` and `events`, linked by a foreign key) and serves a
//! denormalized nested JSON view composed at read time. The one
//! contract worth getting right lives in
//! [`application::store::EventVenueStore`]: venue/event linkage,
//! backend-generated ids surfaced via `RETURNING`, and
//! absence-vs-failure semantics on update and delete.
//!
//! # Layers
//!
//! - [`domain`]: entities and value objects
//! - [`application`]: the store facade and its error type
//! - [`infrastructure`]: the repository port, PostgreSQL and in-memory
//!   implementations
//! - [`api`]: the axum REST surface
//! - [`config`]: layered settings

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
