//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the pass lookup domain.
//! They are built fresh for every lookup and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Approximate geographic position of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A predicted interval during which the ISS passes overhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassWindow {
    /// Start of the pass (unix timestamp, seconds)
    pub risetime: i64,
    /// How long the station stays visible, in seconds
    pub duration: u64,
}

impl PassWindow {
    pub fn new(risetime: i64, duration: u64) -> Self {
        Self { risetime, duration }
    }

    /// Rise time as a UTC date, or None if the timestamp is out of range.
    pub fn rise_time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.risetime, 0)
    }
}

/// Upcoming passes in the order the prediction service returned them.
pub type PassTimes = Vec<PassWindow>;
