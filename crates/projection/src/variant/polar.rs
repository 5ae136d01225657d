//! Polar stereographic domains (`MAP_PROJ = 2`).

use super::base::WrfProj;
use crate::crs::{CartopyCrs, ForwardProjection, PlaneTransform, StereographicCrs};
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

/// A polar stereographic domain.
///
/// The hemisphere follows the sign of TRUELAT1: the projection origin sits on
/// the south pole for negative values and on the north pole otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolarStereographic {
    base: WrfProj,
    hemi: f64,
    lat_ts: Option<f64>,
}

impl PolarStereographic {
    pub fn new(base: WrfProj) -> Self {
        let hemi = match base.truelat1() {
            Some(lat) if lat < 0.0 => -90.0,
            _ => 90.0,
        };
        let lat_ts = base.truelat1().filter(|&lat| !is_missing(Some(lat)));

        debug!(hemi, ?lat_ts, "Polar stereographic projection");

        Self { base, hemi, lat_ts }
    }

    pub fn base(&self) -> &WrfProj {
        &self.base
    }

    /// Latitude of the projection origin: -90 or +90.
    pub fn hemisphere_origin(&self) -> f64 {
        self.hemi
    }

    pub fn true_scale_latitude(&self) -> Option<f64> {
        self.lat_ts
    }

    pub fn proj4(&self) -> String {
        Proj4Builder::new("stere")
            .text("units", "meters")
            .sphere(WRF_EARTH_RADIUS)
            .value("lat_0", self.hemi)
            .opt_value("lon_0", self.base.stand_lon())
            .opt_value("lat_ts", self.lat_ts)
            .build()
    }

    /// Corners projected through [`Self::proj4`], in corner order.
    pub fn extent(&self) -> ProjectionResult<Extent> {
        PlaneTransform::from_descriptor(&self.proj4())?.corner_extent(self.base.corners())
    }

    pub fn cf(&self) -> CfAttributes {
        CfAttributes::new("polar_stereographic")
            .with("straight_vertical_longitude_from_pole", self.base.stand_lon())
            .with("standard_parallel", self.base.truelat1())
            .with("latitude_of_projection_origin", self.hemi)
    }

    pub fn basemap(&self, resolution: BasemapResolution) -> BasemapParams {
        let mut params =
            BasemapParams::new(BasemapProjection::Stere, *self.base.corners(), resolution);
        params.lon_0 = self.base.stand_lon();
        params.lat_0 = Some(self.hemi);
        params.lat_ts = self.lat_ts;
        params
    }

    pub fn cartopy(&self) -> CartopyCrs {
        CartopyCrs::Stereographic(StereographicCrs::new(
            self.hemi,
            self.base.stand_lon(),
            self.lat_ts,
            self.base.globe(),
        ))
    }

    pub fn ngl(&self) -> NglResources {
        let mut res = NglResources::new(NglProjection::Stereographic, *self.base.corners());
        res.center_lon = self.base.stand_lon();
        res.center_lat = Some(if self.hemi > 0.0 { 90.0 } else { -90.0 });
        res
    }
}

impl fmt::Display for PolarStereographic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.describe(f, "PolarStereographic")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ProjectionParameters;
    use wrf_common::{CoordPair, CornerBox};

    fn polar(truelat1: Option<f64>) -> PolarStereographic {
        let corners = CornerBox::new(CoordPair::new(40.0, -170.0), CoordPair::new(65.0, -100.0));
        let params = ProjectionParameters {
            truelat1,
            stand_lon: Some(-150.0),
            ..Default::default()
        };
        PolarStereographic::new(WrfProj::from_corners(corners, params))
    }

    #[test]
    fn test_hemisphere_from_truelat1_sign() {
        assert_eq!(polar(Some(60.0)).hemisphere_origin(), 90.0);
        assert_eq!(polar(Some(0.0)).hemisphere_origin(), 90.0);
        assert_eq!(polar(Some(-71.0)).hemisphere_origin(), -90.0);
        assert_eq!(polar(Some(-0.5)).hemisphere_origin(), -90.0);
    }

    #[test]
    fn test_true_scale_latitude() {
        assert_eq!(polar(Some(60.0)).true_scale_latitude(), Some(60.0));
        assert_eq!(polar(Some(0.0)).true_scale_latitude(), Some(0.0));
        assert_eq!(polar(Some(120.0)).true_scale_latitude(), None);
        assert_eq!(polar(None).true_scale_latitude(), None);
    }

    #[test]
    fn test_proj4() {
        assert_eq!(
            polar(Some(60.0)).proj4(),
            "+proj=stere +units=meters +a=6370000.0 +b=6370000.0 \
             +lat_0=90.0 +lon_0=-150.0 +lat_ts=60.0"
        );
    }

    #[test]
    fn test_cf() {
        let cf = polar(Some(-71.0)).cf();
        assert_eq!(cf.grid_mapping_name(), Some("polar_stereographic"));
        assert_eq!(cf.get_f64("latitude_of_projection_origin"), Some(-90.0));
        assert_eq!(cf.get_f64("standard_parallel"), Some(-71.0));
        assert_eq!(cf.get_f64("straight_vertical_longitude_from_pole"), Some(-150.0));
    }

    #[test]
    fn test_ngl_center() {
        assert_eq!(polar(Some(-60.0)).ngl().center_lat, Some(-90.0));
        assert_eq!(polar(Some(60.0)).ngl().center_lat, Some(90.0));
    }
}
