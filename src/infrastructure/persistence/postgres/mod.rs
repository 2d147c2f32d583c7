//! # PostgreSQL Persistence
//!
//! sqlx-backed implementation of the catalog port.

pub mod catalog_repository;

pub use catalog_repository::PostgresCatalogRepository;
