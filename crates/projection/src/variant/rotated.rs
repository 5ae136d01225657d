//! Rotated lat/lon domains.
//!
//! WRF stores the rotated pole as POLE_LAT/POLE_LON, and WPS sets POLE_LON to
//! 0 for southern-hemisphere domains and 180 for northern ones. Every toolkit
//! encodes the rotation differently, so the derived quantities below are
//! computed once per hemisphere.

use super::base::WrfProj;
use crate::crs::{CartopyCrs, ForwardProjection, RotatedPoleCrs};
use crate::error::ProjectionResult;
use crate::formats::{
    BasemapParams, BasemapProjection, BasemapResolution, CfAttributes, NglProjection, NglResources,
    Proj4Builder,
};
use crate::params::WRF_EARTH_RADIUS;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};
use wrf_common::Extent;

/// Which pole the rotated grid is referenced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Decide the hemisphere from POLE_LON, falling back to the sign of
    /// MOAD_CEN_LAT.
    pub fn infer(pole_lon: Option<f64>, moad_cen_lat: Option<f64>) -> Self {
        let southern_center = matches!(moad_cen_lat, Some(lat) if lat < 0.0);
        match pole_lon {
            Some(lon) if lon == 0.0 => Hemisphere::South,
            Some(lon) if lon != 180.0 => {
                let hemi = if southern_center {
                    Hemisphere::South
                } else {
                    Hemisphere::North
                };
                warn!(
                    pole_lon = lon,
                    ?moad_cen_lat,
                    ?hemi,
                    "POLE_LON is neither 0 nor 180, guessing hemisphere from MOAD_CEN_LAT"
                );
                hemi
            }
            _ if southern_center => Hemisphere::South,
            _ => Hemisphere::North,
        }
    }

    pub fn is_north(self) -> bool {
        self == Hemisphere::North
    }
}

/// A rotated lat/lon domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RotatedLatLon {
    base: WrfProj,
    hemisphere: Hemisphere,
    ngl_cen_lat: Option<f64>,
    ngl_cen_lon: Option<f64>,
    bm_lon_0: Option<f64>,
    bm_cart_pole_lat: Option<f64>,
    cart_pole_lon: Option<f64>,
}

impl RotatedLatLon {
    pub fn new(base: WrfProj) -> Self {
        let hemisphere = Hemisphere::infer(base.pole_lon(), base.moad_cen_lat());
        let north = hemisphere.is_north();

        let lon_0 = base
            .stand_lon()
            .map(|lon| if north { -lon } else { 180.0 - lon });
        let dateline = base
            .stand_lon()
            .map(|lon| if north { -lon - 180.0 } else { -lon });

        let (ngl_cen_lat, ngl_cen_lon, pole_lat) = match (base.pole_lat(), base.stand_lon()) {
            (Some(pole_lat), Some(_)) => {
                let cen_lat = if north { 90.0 - pole_lat } else { pole_lat - 90.0 };
                let pole = if north { pole_lat } else { -pole_lat };
                (Some(cen_lat), lon_0, Some(pole))
            }
            _ => {
                let pole = base
                    .moad_cen_lat()
                    .map(|lat| if north { 90.0 - lat } else { -90.0 - lat });
                (base.moad_cen_lat(), base.stand_lon(), pole)
            }
        };

        debug!(
            ?hemisphere,
            ?ngl_cen_lat,
            ?ngl_cen_lon,
            ?lon_0,
            ?pole_lat,
            ?dateline,
            "Rotated lat/lon projection"
        );

        Self {
            base,
            hemisphere,
            ngl_cen_lat,
            ngl_cen_lon,
            bm_lon_0: lon_0,
            bm_cart_pole_lat: pole_lat,
            cart_pole_lon: dateline,
        }
    }

    pub fn base(&self) -> &WrfProj {
        &self.base
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Map center handed to NGL.
    pub fn ngl_center(&self) -> (Option<f64>, Option<f64>) {
        (self.ngl_cen_lat, self.ngl_cen_lon)
    }

    /// Basemap `lon_0`, also the CF `north_pole_grid_longitude`.
    pub fn basemap_lon_0(&self) -> Option<f64> {
        self.bm_lon_0
    }

    /// Latitude of the rotated pole as Basemap and Cartopy expect it.
    pub fn pole_latitude(&self) -> Option<f64> {
        self.bm_cart_pole_lat
    }

    /// Geographic longitude of the rotated grid's dateline.
    pub fn dateline_longitude(&self) -> Option<f64> {
        self.cart_pole_lon
    }

    /// POLE_LON, or the WPS convention for the hemisphere when absent.
    pub fn effective_pole_lon(&self) -> f64 {
        self.base.pole_lon().unwrap_or(match self.hemisphere {
            Hemisphere::North => 180.0,
            Hemisphere::South => 0.0,
        })
    }

    pub fn proj4(&self) -> String {
        Proj4Builder::new("ob_tran")
            .text("o_proj", "latlon")
            .sphere(WRF_EARTH_RADIUS)
            .value("to_meter", 1f64.to_radians())
            .value("o_lon_p", 180.0 - self.effective_pole_lon())
            .opt_value("o_lat_p", self.bm_cart_pole_lat)
            .opt_value("lon_0", self.cart_pole_lon.map(|lon| 180.0 + lon))
            .build()
    }

    pub fn cf(&self) -> CfAttributes {
        CfAttributes::new("rotated_latitude_longitude")
            .with("grid_north_pole_latitude", self.bm_cart_pole_lat)
            .with("grid_north_pole_longitude", self.base.pole_lon())
            .with("north_pole_grid_longitude", self.bm_lon_0)
    }

    pub fn basemap(&self, resolution: BasemapResolution) -> BasemapParams {
        let mut params =
            BasemapParams::new(BasemapProjection::Rotpole, *self.base.corners(), resolution);
        params.o_lat_p = self.bm_cart_pole_lat;
        params.o_lon_p = self.base.pole_lon();
        params.lon_0 = self.bm_lon_0;
        params
    }

    pub fn cartopy(&self) -> CartopyCrs {
        CartopyCrs::RotatedPole(self.rotated_pole())
    }

    /// Corners in rotated lon/lat degrees, in corner order.
    pub fn extent(&self) -> ProjectionResult<Extent> {
        self.rotated_pole().corner_extent(self.base.corners())
    }

    fn rotated_pole(&self) -> RotatedPoleCrs {
        RotatedPoleCrs::new(
            self.cart_pole_lon,
            self.bm_cart_pole_lat,
            180.0 - self.effective_pole_lon(),
            self.base.globe(),
        )
    }

    pub fn ngl(&self) -> NglResources {
        let mut res =
            NglResources::new(NglProjection::CylindricalEquidistant, *self.base.corners());
        res.center_lat = self.ngl_cen_lat;
        res.center_lon = self.ngl_cen_lon;
        res
    }
}

impl fmt::Display for RotatedLatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.describe(f, "RotatedLatLon")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ProjectionParameters;
    use wrf_common::{CoordPair, CornerBox};

    fn rotated(attrs: &[(&str, f64)]) -> RotatedLatLon {
        let corners = CornerBox::new(CoordPair::new(20.0, -125.0), CoordPair::new(50.0, -70.0));
        let params = ProjectionParameters::from_attrs(attrs.iter().copied());
        RotatedLatLon::new(WrfProj::from_corners(corners, params))
    }

    #[test]
    fn test_pole_lon_zero_is_southern() {
        let proj = rotated(&[("POLE_LAT", 36.0), ("POLE_LON", 0.0), ("STAND_LON", -106.0)]);
        assert_eq!(proj.hemisphere(), Hemisphere::South);
        assert_eq!(proj.dateline_longitude(), Some(106.0));
        assert_eq!(proj.basemap_lon_0(), Some(286.0));
        assert_eq!(proj.pole_latitude(), Some(-36.0));
        assert_eq!(proj.ngl_center(), (Some(-54.0), Some(286.0)));
    }

    #[test]
    fn test_pole_lon_180_is_northern() {
        let proj = rotated(&[
            ("POLE_LAT", 50.0),
            ("POLE_LON", 180.0),
            ("STAND_LON", 100.0),
            ("MOAD_CEN_LAT", 40.0),
        ]);
        assert_eq!(proj.hemisphere(), Hemisphere::North);
        assert_eq!(proj.dateline_longitude(), Some(-280.0));
        assert_eq!(proj.basemap_lon_0(), Some(-100.0));
        assert_eq!(proj.pole_latitude(), Some(50.0));
        assert_eq!(proj.ngl_center(), (Some(40.0), Some(-100.0)));
    }

    #[test]
    fn test_pole_lon_180_with_southern_center() {
        assert_eq!(Hemisphere::infer(Some(180.0), Some(-40.0)), Hemisphere::South);
        assert_eq!(Hemisphere::infer(Some(180.0), Some(0.0)), Hemisphere::North);
    }

    #[test]
    fn test_nonstandard_pole_lon_uses_center_latitude() {
        // Heuristic: only POLE_LON of 0 or 180 is unambiguous.
        let south = rotated(&[("POLE_LON", 45.0), ("MOAD_CEN_LAT", -20.0)]);
        assert_eq!(south.hemisphere(), Hemisphere::South);

        let north = rotated(&[("POLE_LON", 45.0), ("MOAD_CEN_LAT", 20.0)]);
        assert_eq!(north.hemisphere(), Hemisphere::North);

        let unknown = rotated(&[("POLE_LON", 45.0)]);
        assert_eq!(unknown.hemisphere(), Hemisphere::North);
    }

    #[test]
    fn test_absent_pole_lon_uses_center_latitude() {
        assert_eq!(Hemisphere::infer(None, Some(-10.0)), Hemisphere::South);
        assert_eq!(Hemisphere::infer(None, Some(10.0)), Hemisphere::North);
        assert_eq!(Hemisphere::infer(None, None), Hemisphere::North);
    }

    #[test]
    fn test_fallback_without_pole_lat() {
        let proj = rotated(&[("POLE_LON", 180.0), ("STAND_LON", -97.0), ("MOAD_CEN_LAT", 35.0)]);
        assert_eq!(proj.ngl_center(), (Some(35.0), Some(-97.0)));
        assert_eq!(proj.pole_latitude(), Some(55.0));
        assert_eq!(proj.basemap_lon_0(), Some(97.0));
        assert_eq!(proj.dateline_longitude(), Some(-83.0));

        let south = rotated(&[("POLE_LON", 0.0), ("STAND_LON", 20.0), ("MOAD_CEN_LAT", -30.0)]);
        assert_eq!(south.pole_latitude(), Some(-60.0));
    }

    #[test]
    fn test_absent_inputs_stay_absent() {
        let proj = rotated(&[("POLE_LON", 180.0)]);
        assert_eq!(proj.ngl_center(), (None, None));
        assert_eq!(proj.pole_latitude(), None);
        assert_eq!(proj.basemap_lon_0(), None);
        assert_eq!(proj.dateline_longitude(), None);
    }

    #[test]
    fn test_proj4() {
        let proj = rotated(&[("POLE_LAT", 36.0), ("POLE_LON", 0.0), ("STAND_LON", -106.0)]);
        assert_eq!(
            proj.proj4(),
            "+proj=ob_tran +o_proj=latlon +a=6370000.0 +b=6370000.0 \
             +to_meter=0.017453292519943295 +o_lon_p=180.0 +o_lat_p=-36.0 +lon_0=286.0"
        );
    }

    #[test]
    fn test_cf_keeps_supplied_pole_lon() {
        let cf = rotated(&[("POLE_LAT", 50.0), ("STAND_LON", 100.0)]).cf();
        assert_eq!(cf.grid_mapping_name(), Some("rotated_latitude_longitude"));
        assert_eq!(cf.get_f64("grid_north_pole_latitude"), Some(50.0));
        assert!(cf.get("grid_north_pole_longitude").map_or(false, |v| v.is_missing()));
        assert_eq!(cf.get_f64("north_pole_grid_longitude"), Some(-100.0));
    }

    #[test]
    fn test_cartopy_rotation() {
        let proj = rotated(&[("POLE_LAT", 50.0), ("POLE_LON", 180.0), ("STAND_LON", 100.0)]);
        match proj.cartopy() {
            CartopyCrs::RotatedPole(crs) => {
                assert_eq!(crs.pole_longitude, -280.0);
                assert_eq!(crs.pole_latitude, 50.0);
                assert_eq!(crs.central_rotated_longitude, 0.0);
            }
            other => panic!("unexpected crs {:?}", other),
        }
    }
}
