//! # In-Memory Persistence
//!
//! Test-double implementation of the catalog port.

pub mod catalog_repository;

pub use catalog_repository::InMemoryCatalogRepository;
