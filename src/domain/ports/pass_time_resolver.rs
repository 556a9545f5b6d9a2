//! Pass Time Resolver Port
//!
//! Defines the interface for predicting ISS passes over a location.

use crate::domain::entities::{Coordinates, PassTimes};
use crate::domain::error::LookupError;
use async_trait::async_trait;

/// Resolver for upcoming ISS pass windows.
///
/// This is an outbound port that abstracts the pass prediction service.
/// An empty list is a valid answer (no pass currently predicted).
#[async_trait]
pub trait PassTimeResolver: Send + Sync {
    /// Fetch the upcoming passes over `coords`, in upstream order.
    async fn resolve_pass_times(&self, coords: Coordinates) -> Result<PassTimes, LookupError>;
}
