//! Private text client for Remoteless daemon communication
//!
//! This crate provides a minimal blocking HTTP client that performs GET
//! requests and hands back the raw response body as text. Decoding the body
//! is left to `remoteless-parser`.

mod error;

pub use error::TransportError;

use std::time::Duration;
use tracing::debug;

/// Default connect timeout used by [`TextClient::new`]
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default read timeout used by [`TextClient::new`]
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// A minimal blocking client that fetches response bodies as text
#[derive(Debug, Clone)]
pub struct TextClient {
    agent: ureq::Agent,
}

impl TextClient {
    /// Create a new text client with default timeouts
    pub fn new() -> Self {
        Self::with_timeouts(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT)
    }

    /// Create a text client with explicit connect and read timeouts
    pub fn with_timeouts(connect: Duration, read: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(connect)
                .timeout_read(read)
                .build(),
        }
    }

    /// Issue a GET request and return the whole body as UTF-8 text
    ///
    /// # Errors
    /// * [`TransportError::Status`] when the daemon answers with a non-success status
    /// * [`TransportError::Network`] when the connection fails or the body cannot be read
    pub fn get(&self, url: &str) -> Result<String, TransportError> {
        debug!(url, "GET");

        let response = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => TransportError::Status(code),
            ureq::Error::Transport(t) => TransportError::Network(t.to_string()),
        })?;

        let body = response
            .into_string()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        debug!(url, bytes = body.len(), "response received");
        Ok(body)
    }
}

impl Default for TextClient {
    fn default() -> Self {
        Self::new()
    }
}
