//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Public IP address of the caller, as reported by the IP echo service.
///
/// Treated as an opaque token: the remote API decides the textual form
/// (dotted quad, IPv6, ...). No validation is done beyond what upstream returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpAddress(String);

impl IpAddress {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IpAddress {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Step of the lookup pipeline.
///
/// Every error carries the stage it was raised in, so the caller can tell
/// which upstream failed without the orchestrator wrapping anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupStage {
    /// Fetching the caller's public IP
    Ip,
    /// Resolving an IP to latitude/longitude
    Coordinates,
    /// Fetching ISS pass windows for a location
    PassTimes,
}

impl LookupStage {
    /// All stages in pipeline order.
    pub const ALL: [LookupStage; 3] = [Self::Ip, Self::Coordinates, Self::PassTimes];

    /// Human readable name, as used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ip => "IP",
            Self::Coordinates => "coordinates",
            Self::PassTimes => "times",
        }
    }
}

impl fmt::Display for LookupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
