//! Stereographic CRS description.
//!
//! WRF's polar stereographic domains always use a polar aspect with the
//! latitude of true scale taken from TRUELAT1.

use super::Globe;
use serde::Serialize;

/// Stereographic CRS description (Cartopy `Stereographic`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StereographicCrs {
    pub central_latitude: f64,
    pub central_longitude: f64,
    pub true_scale_latitude: Option<f64>,
    pub globe: Globe,
}

impl StereographicCrs {
    pub fn new(
        central_latitude: f64,
        central_longitude: Option<f64>,
        true_scale_latitude: Option<f64>,
        globe: Globe,
    ) -> Self {
        Self {
            central_latitude,
            central_longitude: central_longitude.unwrap_or(0.0),
            true_scale_latitude,
            globe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_central_longitude_defaults_to_zero() {
        let north = StereographicCrs::new(90.0, None, Some(60.0), Globe::wrf());
        assert_eq!(north.central_longitude, 0.0);
        assert_eq!(north.true_scale_latitude, Some(60.0));
    }
}
