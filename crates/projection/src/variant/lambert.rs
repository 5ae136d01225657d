//! Lambert Conformal Conic domains (`MAP_PROJ = 1`).

use super::base::WrfProj;
use crate::crs::{CartopyCrs, ForwardProjection, LambertConformalCrs, PlaneTransform};
use crate::error::ProjectionResult;
use crate::formats::{
    BasemapParams, BasemapProjection, BasemapResolution, CfAttributes, NglProjection, NglResources,
    Proj4Builder,
};
use crate::params::{is_missing, WRF_EARTH_RADIUS};
use serde::Serialize;
use std::fmt;
use tracing::debug;
use wrf_common::Extent;

/// A Lambert Conformal domain.
///
/// Standard parallels are TRUELAT1 plus TRUELAT2 when the latter is valid.
/// PROJ, CF and NGL repeat TRUELAT1 when TRUELAT2 is missing; Basemap gets
/// TRUELAT2 exactly as supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LambertConformal {
    base: WrfProj,
    std_parallels: Vec<f64>,
}

impl LambertConformal {
    pub fn new(base: WrfProj) -> Self {
        let std_parallels: Vec<f64> = base
            .truelat1()
            .into_iter()
            .chain(base.truelat2().filter(|&lat| !is_missing(Some(lat))))
            .collect();

        debug!(?std_parallels, "Lambert conformal projection");

        Self {
            base,
            std_parallels,
        }
    }

    pub fn base(&self) -> &WrfProj {
        &self.base
    }

    pub fn standard_parallels(&self) -> &[f64] {
        &self.std_parallels
    }

    /// TRUELAT2, or TRUELAT1 for a single-parallel (tangent) cone.
    pub fn effective_truelat2(&self) -> Option<f64> {
        if is_missing(self.base.truelat2()) {
            self.base.truelat1()
        } else {
            self.base.truelat2()
        }
    }

    pub fn proj4(&self) -> String {
        Proj4Builder::new("lcc")
            .text("units", "meters")
            .sphere(WRF_EARTH_RADIUS)
            .opt_value("lat_1", self.base.truelat1())
            .opt_value("lat_2", self.effective_truelat2())
            .opt_value("lat_0", self.base.moad_cen_lat())
            .opt_value("lon_0", self.base.stand_lon())
            .build()
    }

    /// Corners projected through [`Self::proj4`], in corner order.
    pub fn extent(&self) -> ProjectionResult<Extent> {
        PlaneTransform::from_descriptor(&self.proj4())?.corner_extent(self.base.corners())
    }

    pub fn cf(&self) -> CfAttributes {
        let standard_parallel: Vec<f64> = self
            .base
            .truelat1()
            .into_iter()
            .chain(self.effective_truelat2())
            .collect();

        CfAttributes::new("lambert_conformal_conic")
            .with("standard_parallel", standard_parallel)
            .with("longitude_of_central_meridian", self.base.stand_lon())
            .with("latitude_of_projection_origin", self.base.moad_cen_lat())
            .with("semi_major_axis", WRF_EARTH_RADIUS)
    }

    pub fn basemap(&self, resolution: BasemapResolution) -> BasemapParams {
        let mut params = BasemapParams::new(BasemapProjection::Lcc, *self.base.corners(), resolution);
        params.lon_0 = self.base.stand_lon();
        params.lat_0 = self.base.moad_cen_lat();
        params.lat_1 = self.base.truelat1();
        params.lat_2 = self.base.truelat2();
        params
    }

    pub fn cartopy(&self) -> CartopyCrs {
        CartopyCrs::LambertConformal(LambertConformalCrs::new(
            self.base.stand_lon(),
            self.base.moad_cen_lat(),
            &self.std_parallels,
            self.base.globe(),
        ))
    }

    pub fn ngl(&self) -> NglResources {
        let mut res = NglResources::new(NglProjection::LambertConformal, *self.base.corners());
        res.lambert_meridian = self.base.stand_lon();
        res.lambert_parallel_1 = self.base.truelat1();
        res.lambert_parallel_2 = self.effective_truelat2();
        res
    }
}

impl fmt::Display for LambertConformal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.describe(f, "LambertConformal")
    }
}
