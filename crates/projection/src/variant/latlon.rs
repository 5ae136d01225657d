//! Unrotated cylindrical equidistant domains.

use super::base::WrfProj;
use crate::crs::{CartopyCrs, PlateCarreeCrs};
use crate::formats::{
    BasemapParams, BasemapProjection, BasemapResolution, CfAttributes, NglProjection, NglResources,
    Proj4Builder,
};
use crate::params::WRF_EARTH_RADIUS;
use serde::Serialize;
use std::fmt;
use wrf_common::Extent;

/// A plain lat/lon domain. Its plane is the lat/lon corner box itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatLon {
    base: WrfProj,
}

impl LatLon {
    pub fn new(base: WrfProj) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &WrfProj {
        &self.base
    }

    pub fn extent(&self) -> Extent {
        self.base.corner_extent()
    }

    pub fn proj4(&self) -> String {
        Proj4Builder::new("eqc")
            .text("units", "meters")
            .sphere(WRF_EARTH_RADIUS)
            .opt_value("lon_0", self.base.stand_lon())
            .build()
    }

    pub fn cf(&self) -> CfAttributes {
        CfAttributes::new("latitude_longitude")
    }

    pub fn basemap(&self, resolution: BasemapResolution) -> BasemapParams {
        let mut params =
            BasemapParams::new(BasemapProjection::Cyl, *self.base.corners(), resolution);
        params.lon_0 = self.base.stand_lon();
        params.lat_0 = self.base.moad_cen_lat();
        params
    }

    pub fn cartopy(&self) -> CartopyCrs {
        CartopyCrs::PlateCarree(PlateCarreeCrs::new(self.base.stand_lon(), self.base.globe()))
    }

    pub fn ngl(&self) -> NglResources {
        let mut res =
            NglResources::new(NglProjection::CylindricalEquidistant, *self.base.corners());
        res.center_lon = self.base.stand_lon();
        res.center_lat = self.base.moad_cen_lat();
        res
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.describe(f, "LatLon")
    }
}
