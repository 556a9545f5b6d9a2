//! Public IP Resolver Port
//!
//! Defines the interface for discovering the caller's public IP address.

use crate::domain::error::LookupError;
use crate::domain::value_objects::IpAddress;
use async_trait::async_trait;

/// Resolver for the public IP address this process is seen from.
///
/// This is an outbound port that abstracts the IP echo service.
#[async_trait]
pub trait IpResolver: Send + Sync {
    /// Fetch the caller's public IP address.
    async fn resolve_my_ip(&self) -> Result<IpAddress, LookupError>;
}
