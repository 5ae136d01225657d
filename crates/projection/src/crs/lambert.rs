//! Lambert Conformal Conic CRS description.
//!
//! WRF's `MAP_PROJ = 1`. A cone tangent or secant to the sphere along one or
//! two standard parallels, unrolled onto a plane.
//!
//! The projection parameters include:
//! - Central longitude (lon0): WRF's STAND_LON
//! - Central latitude (lat0): WRF's MOAD_CEN_LAT, the y origin
//! - Standard parallel(s): TRUELAT1 and optionally TRUELAT2

use super::Globe;
use serde::Serialize;

/// Cartopy's defaults when a parameter is not known.
const DEFAULT_CENTRAL_LONGITUDE: f64 = -96.0;
const DEFAULT_CENTRAL_LATITUDE: f64 = 39.0;
const DEFAULT_STANDARD_PARALLELS: [f64; 2] = [33.0, 45.0];

/// Lambert Conformal Conic CRS description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LambertConformalCrs {
    /// Central meridian in degrees
    pub central_longitude: f64,
    /// Latitude of the y origin in degrees
    pub central_latitude: f64,
    /// One or two standard parallels in degrees
    pub standard_parallels: Vec<f64>,
    pub globe: Globe,
}

impl LambertConformalCrs {
    /// With a single standard parallel the cone is tangent; an empty list
    /// falls back to the default secant pair.
    pub fn new(
        central_longitude: Option<f64>,
        central_latitude: Option<f64>,
        standard_parallels: &[f64],
        globe: Globe,
    ) -> Self {
        let standard_parallels = if standard_parallels.is_empty() {
            DEFAULT_STANDARD_PARALLELS.to_vec()
        } else {
            standard_parallels.to_vec()
        };

        Self {
            central_longitude: central_longitude.unwrap_or(DEFAULT_CENTRAL_LONGITUDE),
            central_latitude: central_latitude.unwrap_or(DEFAULT_CENTRAL_LATITUDE),
            standard_parallels,
            globe,
        }
    }
}
