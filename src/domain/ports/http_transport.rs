//! HTTP Transport Port
//!
//! Defines the generic request-issuing capability the resolvers are built on.
//! Implementations may use reqwest, hyper, or canned responses in tests.

use crate::domain::error::TransportError;
use async_trait::async_trait;
use reqwest::Url;

/// Raw HTTP response, before any status or body interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport for issuing HTTP GET requests.
///
/// Any status code is a successful outcome at this level: only failures
/// to obtain a response at all (DNS, connect, timeout, body read) are errors.
/// Timeouts and connection pooling are the implementation's business.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET request to `url`.
    async fn get(&self, url: Url) -> Result<HttpResponse, TransportError>;
}
