//! Error types for capability operations.

use medium_domain::PlatformError;
use thiserror::Error;

/// Capability error types
#[derive(Error, Debug)]
pub enum CapabilityError {
    /// Content platform error that escaped an operation
    #[error("{0}")]
    Platform(#[from] PlatformError),

    /// Snapshot file could not be loaded
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
