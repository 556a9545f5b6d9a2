//! Open Notify Pass Time Resolver
//!
//! Implements PassTimeResolver using the Open Notify ISS pass prediction API.

use super::json_fetch::fetch_json;
use crate::domain::entities::{Coordinates, PassTimes, PassWindow};
use crate::domain::error::LookupError;
use crate::domain::ports::{HttpTransport, PassTimeResolver};
use crate::domain::value_objects::LookupStage;
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct OpenNotifyResponse {
    response: Vec<PassWindow>,
}

/// Open Notify resolver.
///
/// Passes are returned in the order the API sends them; they are not re-sorted.
pub struct OpenNotifyResolver {
    transport: Arc<dyn HttpTransport>,
    endpoint: Url,
}

impl OpenNotifyResolver {
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    fn pass_times_url(&self, coords: &Coordinates) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("lat", &coords.latitude.to_string())
            .append_pair("lon", &coords.longitude.to_string());
        url
    }
}

#[async_trait]
impl PassTimeResolver for OpenNotifyResolver {
    async fn resolve_pass_times(&self, coords: Coordinates) -> Result<PassTimes, LookupError> {
        let url = self.pass_times_url(&coords);
        let context = format!(" for {}, {}", coords.latitude, coords.longitude);

        let resp: OpenNotifyResponse = fetch_json(
            self.transport.as_ref(),
            LookupStage::PassTimes,
            url,
            &context,
        )
        .await?;

        tracing::debug!("{} upcoming passes predicted", resp.response.len());
        Ok(resp.response)
    }
}
