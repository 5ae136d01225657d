//! Cartopy-style CRS descriptions and the forward transforms behind extents.
//!
//! Lambert, Mercator and stereographic planes are projected with `proj4rs`
//! through [`PlaneTransform`]. `proj4rs` has no oblique (`ob_tran`) transform,
//! so [`RotatedPoleCrs`] carries its own.

pub mod geographic;
pub mod lambert;
pub mod mercator;
pub mod polar;
pub mod rotated;
pub mod transform;

pub use geographic::{wrap_longitude, PlateCarreeCrs};
pub use lambert::LambertConformalCrs;
pub use mercator::{separate_x_limits, MercatorCrs, MercatorWithLatTs};
pub use polar::StereographicCrs;
pub use rotated::RotatedPoleCrs;
pub use transform::PlaneTransform;

use crate::error::ProjectionResult;
use crate::params::WRF_EARTH_RADIUS;
use serde::{Deserialize, Serialize};
use wrf_common::{CornerBox, Extent};

/// Forward transform from geographic degrees to plane coordinates.
pub trait ForwardProjection {
    /// Project `(lon, lat)` in degrees to `(x, y)`.
    fn project(&self, lon: f64, lat: f64) -> ProjectionResult<(f64, f64)>;

    /// Plane limits spanned by a domain's corners, in corner order.
    fn corner_extent(&self, corners: &CornerBox) -> ProjectionResult<Extent> {
        let (x0, y0) = self.project(corners.ll_lon(), corners.ll_lat())?;
        let (x1, y1) = self.project(corners.ur_lon(), corners.ur_lat())?;
        Ok(Extent::new([x0, x1], [y0, y1]))
    }
}

/// Earth model for a CRS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Globe {
    pub semimajor_axis: f64,
    pub semiminor_axis: f64,
}

impl Globe {
    /// The sphere WRF assumes.
    pub fn wrf() -> Self {
        Self {
            semimajor_axis: WRF_EARTH_RADIUS,
            semiminor_axis: WRF_EARTH_RADIUS,
        }
    }
}

impl Default for Globe {
    fn default() -> Self {
        Self::wrf()
    }
}

/// A Cartopy CRS built from WRF parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "crs")]
pub enum CartopyCrs {
    LambertConformal(LambertConformalCrs),
    Mercator(MercatorCrs),
    MercatorWithLatTs(MercatorWithLatTs),
    Stereographic(StereographicCrs),
    PlateCarree(PlateCarreeCrs),
    RotatedPole(RotatedPoleCrs),
}

impl CartopyCrs {
    /// Cartopy class name.
    pub fn name(&self) -> &'static str {
        match self {
            CartopyCrs::LambertConformal(_) => "LambertConformal",
            CartopyCrs::Mercator(_) => "Mercator",
            CartopyCrs::MercatorWithLatTs(_) => "MercatorWithLatTS",
            CartopyCrs::Stereographic(_) => "Stereographic",
            CartopyCrs::PlateCarree(_) => "PlateCarree",
            CartopyCrs::RotatedPole(_) => "RotatedPole",
        }
    }

    pub fn globe(&self) -> Globe {
        match self {
            CartopyCrs::LambertConformal(c) => c.globe,
            CartopyCrs::Mercator(c) => c.globe,
            CartopyCrs::MercatorWithLatTs(c) => c.globe,
            CartopyCrs::Stereographic(c) => c.globe,
            CartopyCrs::PlateCarree(c) => c.globe,
            CartopyCrs::RotatedPole(c) => c.globe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrf_common::CoordPair;

    #[test]
    fn test_corner_extent_uses_corner_order() {
        let crs = RotatedPoleCrs::new(Some(0.0), Some(90.0), 0.0, Globe::wrf());
        let corners = CornerBox::new(CoordPair::new(-5.0, 10.0), CoordPair::new(5.0, 20.0));
        let extent = crs.corner_extent(&corners).unwrap();
        assert!((extent.x_limits[0] - 10.0).abs() < 1e-9, "{:?}", extent);
        assert!((extent.x_limits[1] - 20.0).abs() < 1e-9, "{:?}", extent);
        assert!((extent.y_limits[0] + 5.0).abs() < 1e-9, "{:?}", extent);
        assert!((extent.y_limits[1] - 5.0).abs() < 1e-9, "{:?}", extent);
    }

    #[test]
    fn test_wrf_globe_is_sphere() {
        let globe = Globe::wrf();
        assert_eq!(globe.semimajor_axis, 6_370_000.0);
        assert_eq!(globe.semiminor_axis, globe.semimajor_axis);
    }
}
