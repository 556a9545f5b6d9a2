//! reqwest HTTP Transport
//!
//! Implements HttpTransport on top of a shared reqwest client.

use crate::domain::error::TransportError;
use crate::domain::ports::{HttpResponse, HttpTransport};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed transport.
///
/// The client is reused across requests so connections are pooled.
/// The timeout covers the whole request, body included.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TransportError::new)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::new)?;

        Ok(HttpResponse { status, body })
    }
}
