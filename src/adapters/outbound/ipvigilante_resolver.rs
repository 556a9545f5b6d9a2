//! ipvigilante Geo Resolver
//!
//! Implements GeoResolver using the ipvigilante geolocation API.

use super::json_fetch::fetch_json;
use crate::domain::entities::Coordinates;
use crate::domain::error::LookupError;
use crate::domain::ports::{GeoResolver, HttpTransport};
use crate::domain::value_objects::{IpAddress, LookupStage};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct VigilanteResponse {
    data: VigilanteData,
}

#[derive(Debug, Deserialize)]
struct VigilanteData {
    latitude: Option<NumberOrText>,
    longitude: Option<NumberOrText>,
}

/// ipvigilante sends coordinates as strings ("45.5000"), sometimes as numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn coerce(field: &str, value: Option<NumberOrText>) -> Result<f64, LookupError> {
    let number = match value {
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(text)) => text.trim().parse::<f64>().map_err(|_| {
            LookupError::parse(
                LookupStage::Coordinates,
                format!("{} {:?} is not a number", field, text),
            )
        })?,
        None => {
            return Err(LookupError::parse(
                LookupStage::Coordinates,
                format!("missing {}", field),
            ))
        }
    };

    if !number.is_finite() {
        return Err(LookupError::parse(
            LookupStage::Coordinates,
            format!("{} is not finite", field),
        ));
    }

    Ok(number)
}

/// ipvigilante resolver.
///
/// The IP is appended to the endpoint path as a single, percent-encoded segment.
pub struct IpVigilanteResolver {
    transport: Arc<dyn HttpTransport>,
    endpoint: Url,
}

impl IpVigilanteResolver {
    /// Create a resolver for `endpoint`, which must be able to take path segments.
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: Url) -> anyhow::Result<Self> {
        if endpoint.cannot_be_a_base() {
            anyhow::bail!("geolocation endpoint {} cannot take a path", endpoint);
        }
        Ok(Self {
            transport,
            endpoint,
        })
    }

    fn coordinates_url(&self, ip: &IpAddress) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(ip.as_str());
        }
        url
    }
}

#[async_trait]
impl GeoResolver for IpVigilanteResolver {
    async fn resolve_coordinates(&self, ip: IpAddress) -> Result<Coordinates, LookupError> {
        let url = self.coordinates_url(&ip);
        let context = format!(" for {}", ip);

        let resp: VigilanteResponse = fetch_json(
            self.transport.as_ref(),
            LookupStage::Coordinates,
            url,
            &context,
        )
        .await?;

        let coords = Coordinates::new(
            coerce("latitude", resp.data.latitude)?,
            coerce("longitude", resp.data.longitude)?,
        );

        tracing::debug!(
            "{} is at lat={} lon={}",
            ip,
            coords.latitude,
            coords.longitude
        );
        Ok(coords)
    }
}
