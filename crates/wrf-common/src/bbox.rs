//! Projected-plane extents.

use serde::{Deserialize, Serialize};

/// X and Y limits of a domain in a projection's plane.
///
/// Limits are stored in corner order: index 0 comes from the bottom-left
/// corner and index 1 from the top-right corner. For a well-formed domain this
/// is also (min, max). Units depend on the projection (meters for conformal
/// projections, degrees for lat/lon and rotated-pole).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub x_limits: [f64; 2],
    pub y_limits: [f64; 2],
}

impl Extent {
    pub fn new(x_limits: [f64; 2], y_limits: [f64; 2]) -> Self {
        Self { x_limits, y_limits }
    }

    /// Width of the extent in plane units.
    pub fn width(&self) -> f64 {
        self.x_limits[1] - self.x_limits[0]
    }

    /// Height of the extent in plane units.
    pub fn height(&self) -> f64 {
        self.y_limits[1] - self.y_limits[0]
    }

    /// Check if a plane point lies inside the extent.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let (min_x, max_x) = ordered(self.x_limits);
        let (min_y, max_y) = ordered(self.y_limits);
        x >= min_x && x <= max_x && y >= min_y && y <= max_y
    }
}

fn ordered([a, b]: [f64; 2]) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
