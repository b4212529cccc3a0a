//! Error types for Degrees Core

use thiserror::Error;

/// Result type alias using the core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types
///
/// Running out of candidates is not an error: an exhausted search reports
/// [`Outcome::NotConnected`](crate::traversal::Outcome::NotConnected).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Empty frontier")]
    EmptyFrontier,

    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
