//! Application Layer
//!
//! Use cases built on top of the domain ports.

mod pass_time_service;

pub use pass_time_service::PassTimeService;
