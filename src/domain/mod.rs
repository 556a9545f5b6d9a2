//! Domain Layer
//!
//! Entities, value objects, errors and the ports the application depends on.

pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{Coordinates, PassTimes, PassWindow};
pub use error::{LookupError, TransportError};
pub use value_objects::{IpAddress, LookupStage};
