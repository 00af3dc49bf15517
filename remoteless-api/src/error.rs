use remoteless_parser::DecodeError;
use text_client::TransportError;
use thiserror::Error;

/// High-level API errors for Remoteless calls
///
/// Every error fails the whole call. A listing that fails on its third page
/// returns the error, not the first two pages.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The daemon could not be reached or answered with an error status
    ///
    /// Not retried. For the action commands, a failure after the request
    /// left may still have triggered the action on the daemon.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The daemon answered, but the body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Client configuration rejected by [`crate::ClientConfig::validate`]
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// Whether the daemon was unreachable or refused the request
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
