//! Coordinate type for encoded and decoded tracks.

use serde::{Deserialize, Serialize};

/// A GPS coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, valid range [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, valid range [-180, 180]
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees
    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Coordinate {
    #[inline]
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}
