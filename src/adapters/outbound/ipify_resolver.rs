//! ipify IP Resolver
//!
//! Implements IpResolver using the ipify public IP echo service.

use super::json_fetch::fetch_json;
use crate::domain::error::LookupError;
use crate::domain::ports::{HttpTransport, IpResolver};
use crate::domain::value_objects::{IpAddress, LookupStage};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct IpifyResponse {
    ip: IpAddress,
}

/// ipify resolver.
///
/// The endpoint must ask for JSON output (`?format=json`).
pub struct IpifyResolver {
    transport: Arc<dyn HttpTransport>,
    endpoint: Url,
}

impl IpifyResolver {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
        }
    }
}

#[async_trait]
impl IpResolver for IpifyResolver {
    async fn resolve_my_ip(&self) -> Result<IpAddress, LookupError> {
        let resp: IpifyResponse = fetch_json(
            self.transport.as_ref(),
            LookupStage::Ip,
            self.endpoint.clone(),
            "",
        )
        .await?;

        tracing::debug!("public IP is {}", resp.ip);
        Ok(resp.ip)
    }
}
