//! Adapters Layer
//!
//! Outbound adapters implement the domain ports over HTTP; inbound adapters
//! drive the application from the outside world.

pub mod inbound;
pub mod outbound;
