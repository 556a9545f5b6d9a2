//! Pass Time Service - Main application use case
//!
//! Chains the three lookups: public IP, then coordinates for that IP, then
//! ISS passes over those coordinates. Stages run strictly one after the
//! other and the first failure ends the lookup with that stage's error.

use crate::domain::entities::PassTimes;
use crate::domain::error::LookupError;
use crate::domain::ports::{GeoResolver, IpResolver, PassTimeResolver};
use crate::domain::value_objects::LookupStage;
use futures::TryFutureExt;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Pass time service - main application use case.
///
/// This service orchestrates one lookup per call:
/// 1. Resolves the caller's public IP
/// 2. Resolves that IP to coordinates
/// 3. Fetches the upcoming ISS passes for those coordinates
///
/// Nothing is cached between calls, so one service can be shared by any
/// number of concurrent callers.
pub struct PassTimeService {
    ip_resolver: Arc<dyn IpResolver>,
    geo_resolver: Arc<dyn GeoResolver>,
    pass_time_resolver: Arc<dyn PassTimeResolver>,
}

impl PassTimeService {
    /// Create a new pass time service.
    pub fn new(
        ip_resolver: Arc<dyn IpResolver>,
        geo_resolver: Arc<dyn GeoResolver>,
        pass_time_resolver: Arc<dyn PassTimeResolver>,
    ) -> Self {
        Self {
            ip_resolver,
            geo_resolver,
            pass_time_resolver,
        }
    }

    /// Fetch the next ISS passes over the caller's current location.
    ///
    /// # Returns
    /// Every pass the prediction service returned, in its order (possibly
    /// none), or the error of the first stage that failed. Later stages are
    /// not started once one fails, and the error is returned unchanged.
    pub async fn next_pass_times_for_current_location(&self) -> Result<PassTimes, LookupError> {
        let ip = self
            .ip_resolver
            .resolve_my_ip()
            .await
            .inspect_err(log_failure)?;

        let coords = self
            .geo_resolver
            .resolve_coordinates(ip)
            .await
            .inspect_err(log_failure)?;

        let passes = self
            .pass_time_resolver
            .resolve_pass_times(coords)
            .await
            .inspect_err(log_failure)?;

        tracing::debug!("lookup done, {} passes", passes.len());
        Ok(passes)
    }

    /// Same lookup, expressed as a chain of deferred values.
    ///
    /// Each continuation only runs once the previous future resolved to a
    /// value; an error skips the rest of the chain.
    pub async fn next_pass_times_chained(&self) -> Result<PassTimes, LookupError> {
        let geo = self.geo_resolver.as_ref();
        let passes = self.pass_time_resolver.as_ref();

        self.ip_resolver
            .resolve_my_ip()
            .and_then(move |ip| geo.resolve_coordinates(ip))
            .and_then(move |coords| passes.resolve_pass_times(coords))
            .inspect_err(log_failure)
            .await
    }

    /// Same lookup, reporting through a completion callback.
    ///
    /// The lookup runs on a spawned tokio task and `callback` is invoked
    /// exactly once with either the passes or the single error. The returned
    /// handle completes after the callback has run.
    pub fn next_pass_times_with_callback<F>(self: &Arc<Self>, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<PassTimes, LookupError>) + Send + 'static,
    {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            let result = service.next_pass_times_for_current_location().await;
            callback(result);
        })
    }
}

fn log_failure(err: &LookupError) {
    match err.stage() {
        LookupStage::Ip => tracing::debug!("lookup failed awaiting IP: {}", err),
        LookupStage::Coordinates => tracing::debug!("lookup failed awaiting coordinates: {}", err),
        LookupStage::PassTimes => tracing::debug!("lookup failed awaiting passes: {}", err),
    }
}
