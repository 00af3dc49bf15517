//! Error types for the text client

use thiserror::Error;

/// Errors that can occur while fetching a response body
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, DNS or body read failure
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The daemon answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),
}
