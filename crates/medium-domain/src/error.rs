//! Error types for content platform operations.

use thiserror::Error;

/// Errors reported by a [`ContentPlatform`](crate::ContentPlatform) implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The requested entity does not exist
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. "User" or "Article"
        kind: &'static str,
        /// Identifier that was looked up
        id: String,
    },

    /// The platform rejected the request arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The platform could not serve the request
    #[error("Platform error: {0}")]
    Unavailable(String),
}

impl PlatformError {
    /// Shorthand for a not-found error
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        PlatformError::NotFound {
            kind,
            id: id.into(),
        }
    }
}
