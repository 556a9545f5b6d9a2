//! Geolocation Resolver Port
//!
//! Defines the interface for resolving an IP address to coordinates.

use crate::domain::entities::Coordinates;
use crate::domain::error::LookupError;
use crate::domain::value_objects::IpAddress;
use async_trait::async_trait;

/// Resolver for IP address to geographic position.
///
/// This is an outbound port that abstracts the geolocation service.
/// Implementations must fail with a `LookupError` tagged
/// `LookupStage::Coordinates` when the position cannot be determined.
#[async_trait]
pub trait GeoResolver: Send + Sync {
    /// Resolve an IP address to approximate latitude/longitude.
    async fn resolve_coordinates(&self, ip: IpAddress) -> Result<Coordinates, LookupError>;
}
