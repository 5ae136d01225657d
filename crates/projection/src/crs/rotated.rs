//! Rotated-pole lat/lon (Cartopy `RotatedPole`).
//!
//! `proj4rs` has no `ob_tran`, so the pole rotation is done here.
//! Expressed as an oblique transform of a lat/lon grid:
//! `o_lat_p` is the latitude of the rotated pole, `o_lon_p` the rotated
//! longitude of the geographic pole, and `lon_0 = 180 + pole_longitude`.
//! Here `pole_longitude` is the geographic longitude of the rotated grid's
//! dateline, not its central meridian. Output coordinates are rotated
//! longitude/latitude in degrees.

use super::geographic::wrap_longitude;
use super::{ForwardProjection, Globe};
use crate::error::ProjectionResult;
use serde::Serialize;

/// Rotated-pole CRS description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RotatedPoleCrs {
    pub pole_longitude: f64,
    pub pole_latitude: f64,
    pub central_rotated_longitude: f64,
    pub globe: Globe,
}

impl RotatedPoleCrs {
    pub fn new(
        pole_longitude: Option<f64>,
        pole_latitude: Option<f64>,
        central_rotated_longitude: f64,
        globe: Globe,
    ) -> Self {
        Self {
            pole_longitude: pole_longitude.unwrap_or(0.0),
            pole_latitude: pole_latitude.unwrap_or(90.0),
            central_rotated_longitude,
            globe,
        }
    }

    /// `lon_0` of the equivalent oblique transform.
    pub fn lon_0(&self) -> f64 {
        180.0 + self.pole_longitude
    }
}

impl ForwardProjection for RotatedPoleCrs {
    fn project(&self, lon: f64, lat: f64) -> ProjectionResult<(f64, f64)> {
        let (sin_phip, cos_phip) = self.pole_latitude.to_radians().sin_cos();
        let lam = wrap_longitude(lon - self.lon_0()).to_radians();
        let (sin_phi, cos_phi) = lat.to_radians().sin_cos();
        let (sin_lam, cos_lam) = lam.sin_cos();

        let rot_lam = (cos_phi * sin_lam).atan2(sin_phip * cos_phi * cos_lam + cos_phip * sin_phi);
        let rot_phi = (sin_phip * sin_phi - cos_phip * cos_phi * cos_lam).clamp(-1.0, 1.0).asin();

        let x = wrap_longitude(rot_lam.to_degrees() + self.central_rotated_longitude);
        Ok((x, rot_phi.to_degrees()))
    }
}
