//! Error types for MCP server operations.

use medium_stats::CapabilityError;
use serde::Serialize;
use thiserror::Error;

/// MCP server error types
#[derive(Error, Debug)]
pub enum McpError {
    /// Inbound line is not a JSON-RPC message
    #[error("Invalid JSON request")]
    Parse(#[source] serde_json::Error),

    /// Request names a method the server does not implement
    #[error("Unknown method: {0}")]
    MethodNotFound(String),

    /// Request parameters have the wrong shape
    #[error("{0}")]
    InvalidParams(String),

    /// Required tool argument is absent or null
    #[error("Parameter '{0}' is required")]
    MissingParameter(String),

    /// Tool arguments could not be interpreted
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Capability failed to produce an outcome
    #[error("{0}")]
    Capability(#[from] CapabilityError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl McpError {
    /// Protocol error code reported for this error
    pub fn error_code(&self) -> ErrorCode {
        match self {
            McpError::Parse(_) => ErrorCode::ParseError,
            McpError::MethodNotFound(_) => ErrorCode::MethodNotFound,
            McpError::InvalidParams(_) => ErrorCode::InvalidParams,
            _ => ErrorCode::InternalError,
        }
    }
}

/// Short-token error codes carried in protocol error objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Inbound line could not be parsed
    ParseError,
    /// Unknown method on a request
    MethodNotFound,
    /// Malformed method parameters
    InvalidParams,
    /// Unexpected failure while handling a request
    InternalError,
}

impl ErrorCode {
    /// Wire token for this code
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ParseError => "parse_error",
            ErrorCode::MethodNotFound => "method_not_found",
            ErrorCode::InvalidParams => "invalid_params",
            ErrorCode::InternalError => "internal_error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
