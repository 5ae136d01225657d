//! Geographic helpers and the plate carrée CRS.

use super::Globe;
use serde::Serialize;

/// Tolerance before a longitude difference is wrapped.
const WRAP_TOLERANCE_DEG: f64 = 1e-9;

/// Wrap a longitude difference (degrees) into [-180, 180].
///
/// Values already within the range (give or take rounding) are returned
/// unchanged, so ±180 keep their sign.
pub fn wrap_longitude(dlon: f64) -> f64 {
    if dlon.abs() <= 180.0 + WRAP_TOLERANCE_DEG {
        return dlon;
    }
    let shifted = dlon + 180.0;
    shifted - 360.0 * (shifted / 360.0).floor() - 180.0
}

/// Equirectangular CRS in degrees (Cartopy `PlateCarree`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlateCarreeCrs {
    pub central_longitude: f64,
    pub globe: Globe,
}

impl PlateCarreeCrs {
    pub fn new(central_longitude: Option<f64>, globe: Globe) -> Self {
        Self {
            central_longitude: central_longitude.unwrap_or(0.0),
            globe,
        }
    }
}
