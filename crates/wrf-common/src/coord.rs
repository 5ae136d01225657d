//! Geographic coordinate pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic point in degrees.
///
/// Latitude comes first, matching the order WRF writes its corner attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordPair {
    pub lat: f64,
    pub lon: f64,
}

impl CoordPair {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for CoordPair {
    /// Builds a pair from a `(lat, lon)` tuple.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for CoordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.lat, self.lon)
    }
}
