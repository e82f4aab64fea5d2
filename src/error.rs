//! Error types for `presmode`
//!
//! This module defines all error types used throughout the crate. Device
//! facade failures preserve their underlying cause via `#[source]` so the
//! full error chain stays visible in logs.
//!
//! Note that a *failed status query* is usually not an error at all from the
//! reconciler's point of view: a query for a call or conference that does not
//! currently exist is expected absence and is mapped to a default reading at
//! the call site.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `presmode` operations
#[derive(Debug, Error)]
pub enum PresModeError {
    /// A device status or configuration query failed
    /// Preserves the underlying error source for full error chain transparency
    #[error("Device query failed: {0}")]
    QueryFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A device command or configuration write failed
    /// Preserves the underlying error source for full error chain transparency
    #[error("Device command failed: {0}")]
    CommandFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A connector index that does not exist on this endpoint
    #[error("Unknown connector index: {0}")]
    UnknownConnector(u32),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `presmode` operations
pub type Result<T> = std::result::Result<T, PresModeError>;
