//! Relay-specific error types

use thiserror::Error;

/// Result type for relay operations
pub type RelayResult<T> = Result<T, RelayError>;

/// Relay error types
///
/// The `Display` strings are part of the HTTP contract: handlers return them
/// verbatim in the JSON `error` field.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("No problem input provided")]
    EmptyInput,

    #[error("Invalid input: Must be a LeetCode ID (e.g., 242) or full URL")]
    InvalidFormat,

    #[error("Failed to fetch problem: {message}")]
    FetchFailed { message: String },

    #[error("Model backend unreachable: {message}")]
    BackendUnreachable { message: String },

    #[error("Model backend returned HTTP {status}")]
    BackendError { status: u16 },

    #[error("Failed to generate summary: {message}")]
    SummaryFailed { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
