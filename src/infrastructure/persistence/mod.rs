//! # Persistence
//!
//! The catalog repository port and its implementations.
//!
//! - [`traits`]: the [`CatalogRepository`] port and [`RepositoryError`]
//! - [`postgres`]: production implementation over `sqlx::PgPool`
//! - [`in_memory`]: test double over shared `HashMap`s

pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use in_memory::InMemoryCatalogRepository;
pub use postgres::PostgresCatalogRepository;
pub use traits::{CatalogRepository, RepositoryError, RepositoryResult};
