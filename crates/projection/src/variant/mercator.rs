//! Mercator domains (`MAP_PROJ = 3`).

use super::base::WrfProj;
use crate::crs::{CartopyCrs, ForwardProjection, MercatorCrs, MercatorWithLatTs, PlaneTransform};
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

/// A Mercator domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mercator {
    base: WrfProj,
    lat_ts: Option<f64>,
}

impl Mercator {
    pub fn new(base: WrfProj) -> Self {
        let lat_ts = match base.truelat1() {
            Some(lat) if lat != 0.0 && !is_missing(Some(lat)) => Some(lat),
            _ => None,
        };

        debug!(?lat_ts, "Mercator projection");

        Self { base, lat_ts }
    }

    pub fn base(&self) -> &WrfProj {
        &self.base
    }

    /// Latitude of true scale; absent when TRUELAT1 is 0 or invalid.
    pub fn true_scale_latitude(&self) -> Option<f64> {
        self.lat_ts
    }

    pub fn proj4(&self) -> String {
        Proj4Builder::new("merc")
            .text("units", "meters")
            .sphere(WRF_EARTH_RADIUS)
            .opt_value("lon_0", self.base.stand_lon())
            .opt_value("lat_ts", self.lat_ts)
            .build()
    }

    /// Corners projected through [`Self::proj4`], in corner order.
    pub fn extent(&self) -> ProjectionResult<Extent> {
        PlaneTransform::from_descriptor(&self.proj4())?.corner_extent(self.base.corners())
    }

    pub fn cf(&self) -> CfAttributes {
        CfAttributes::new("mercator")
            .with("longitude_of_projection_origin", self.base.stand_lon())
            .with("standard_parallel", self.base.truelat1())
    }

    pub fn basemap(&self, resolution: BasemapResolution) -> BasemapParams {
        let mut params =
            BasemapParams::new(BasemapProjection::Merc, *self.base.corners(), resolution);
        params.lon_0 = self.base.stand_lon();
        params.lat_0 = self.base.moad_cen_lat();
        params.lat_ts = self.lat_ts;
        params
    }

    /// Plain Mercator without a true-scale latitude, otherwise the
    /// true-scale variant with recomputed limits.
    pub fn cartopy(&self) -> ProjectionResult<CartopyCrs> {
        Ok(match self.lat_ts {
            None => CartopyCrs::Mercator(MercatorCrs::new(self.base.stand_lon(), self.base.globe())),
            Some(lat_ts) => CartopyCrs::MercatorWithLatTs(MercatorWithLatTs::new(
                self.base.stand_lon(),
                lat_ts,
                self.base.globe(),
            )?),
        })
    }

    pub fn ngl(&self) -> NglResources {
        let mut res = NglResources::new(NglProjection::Mercator, *self.base.corners());
        res.center_lat = Some(0.0);
        res.center_lon = self.base.stand_lon();
        res
    }
}

impl fmt::Display for Mercator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.describe(f, "Mercator")
    }
}
