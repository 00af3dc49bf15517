//! The seam between [`crate::RemotelessClient`] and the network.

use std::sync::Arc;

use text_client::{TextClient, TransportError};

/// Fetches a URL and returns the response body as text.
///
/// [`TextClient`] is the production implementation. Tests and embedders can
/// supply their own to serve canned bodies.
pub trait Transport {
    /// Perform one GET request against `url`
    fn fetch_text(&self, url: &str) -> Result<String, TransportError>;
}

impl Transport for TextClient {
    fn fetch_text(&self, url: &str) -> Result<String, TransportError> {
        self.get(url)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch_text(&self, url: &str) -> Result<String, TransportError> {
        (**self).fetch_text(url)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn fetch_text(&self, url: &str) -> Result<String, TransportError> {
        (**self).fetch_text(url)
    }
}
