//! # Application Errors
//!
//! Error types for the application layer.
//!
//! Only three kinds of failure cross the store boundary:
//!
//! ```text
//! ApplicationError
//! ├── NotFound            - addressed record absent
//! ├── Validation          - request shape unusable (e.g. missing venue id)
//! └── Repository          - any backend failure, surfaced opaquely
//! ```
//!
//! # Examples
//!
//! ```
//! use venue_events::application::error::ApplicationError;
//!
//! let err = ApplicationError::not_found("Event", "7c9e6679-7425-40de-944b-e07fc1f90ae7");
//! assert!(err.is_not_found());
//! ```

use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The addressed record does not exist.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        /// Type of record.
        entity_type: &'static str,
        /// Record identifier.
        id: String,
    },

    /// The request shape cannot be mapped onto an operation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Backend failure, terminal for the request.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ApplicationError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for store operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_entity_and_id() {
        let err = ApplicationError::not_found("Event", "abc");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Event"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn validation_error() {
        let err = ApplicationError::validation("venue.id is required");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn repository_error_wraps() {
        let err: ApplicationError = RepositoryError::query("boom").into();
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("boom"));
    }
}
