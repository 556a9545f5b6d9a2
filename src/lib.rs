//! ISS pass finder library
//!
//! Looks up the caller's public IP, geolocates it and fetches the upcoming
//! ISS passes over that location. Exposed as a library for the binary and
//! for integration tests.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::outbound::{IpVigilanteResolver, IpifyResolver, OpenNotifyResolver, ReqwestTransport};
pub use application::PassTimeService;
pub use config::{load_config, Config};
pub use domain::entities::{Coordinates, PassTimes, PassWindow};
pub use domain::error::{LookupError, TransportError};
pub use domain::ports::{GeoResolver, HttpResponse, HttpTransport, IpResolver, PassTimeResolver};
pub use domain::value_objects::{IpAddress, LookupStage};
