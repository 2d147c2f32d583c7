//! # Application Layer
//!
//! Use-case level logic: the [`EventVenueStore`] facade and its error
//! type.

pub mod error;
pub mod store;

pub use error::{ApplicationError, ApplicationResult};
pub use store::EventVenueStore;
