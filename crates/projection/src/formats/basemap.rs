//! Basemap keyword parameters.
//!
//! Basemap takes the projection as a short name plus keyword arguments, with
//! the map limits given as lower-left/upper-right corners.

use super::{AttrMap, AttrValue};
use crate::params::WRF_EARTH_RADIUS;
use serde::{Deserialize, Serialize};
use wrf_common::CornerBox;

/// Basemap projection names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasemapProjection {
    Lcc,
    Merc,
    Stere,
    Cyl,
    Rotpole,
}

impl BasemapProjection {
    pub fn as_str(&self) -> &'static str {
        match self {
            BasemapProjection::Lcc => "lcc",
            BasemapProjection::Merc => "merc",
            BasemapProjection::Stere => "stere",
            BasemapProjection::Cyl => "cyl",
            BasemapProjection::Rotpole => "rotpole",
        }
    }

    /// Projection keywords passed even when their value is absent.
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            BasemapProjection::Lcc => &["lon_0", "lat_0", "lat_1", "lat_2"],
            BasemapProjection::Merc | BasemapProjection::Stere => &["lon_0", "lat_0", "lat_ts"],
            BasemapProjection::Cyl => &["lon_0", "lat_0"],
            BasemapProjection::Rotpole => &["o_lat_p", "o_lon_p", "lon_0"],
        }
    }
}

/// Coastline resolution of the boundary database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BasemapResolution {
    Crude,
    #[default]
    Low,
    Intermediate,
    High,
    Full,
}

impl BasemapResolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            BasemapResolution::Crude => "c",
            BasemapResolution::Low => "l",
            BasemapResolution::Intermediate => "i",
            BasemapResolution::High => "h",
            BasemapResolution::Full => "f",
        }
    }
}

/// Keyword arguments for a Basemap instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasemapParams {
    pub projection: BasemapProjection,
    pub lon_0: Option<f64>,
    pub lat_0: Option<f64>,
    pub lat_1: Option<f64>,
    pub lat_2: Option<f64>,
    pub lat_ts: Option<f64>,
    pub o_lat_p: Option<f64>,
    pub o_lon_p: Option<f64>,
    pub corners: CornerBox,
    pub rsphere: f64,
    pub resolution: BasemapResolution,
}

impl BasemapParams {
    /// Parameters with no projection keywords set yet.
    pub fn new(
        projection: BasemapProjection,
        corners: CornerBox,
        resolution: BasemapResolution,
    ) -> Self {
        Self {
            projection,
            lon_0: None,
            lat_0: None,
            lat_1: None,
            lat_2: None,
            lat_ts: None,
            o_lat_p: None,
            o_lon_p: None,
            corners,
            rsphere: WRF_EARTH_RADIUS,
            resolution,
        }
    }

    fn keyword(&self, key: &str) -> Option<f64> {
        match key {
            "lon_0" => self.lon_0,
            "lat_0" => self.lat_0,
            "lat_1" => self.lat_1,
            "lat_2" => self.lat_2,
            "lat_ts" => self.lat_ts,
            "o_lat_p" => self.o_lat_p,
            "o_lon_p" => self.o_lon_p,
            _ => None,
        }
    }

    /// Flatten into Basemap keyword arguments.
    pub fn to_attrs(&self) -> AttrMap {
        let mut attrs = AttrMap::new();
        attrs.insert("projection".to_string(), self.projection.as_str().into());
        for key in self.projection.keywords() {
            attrs.insert(key.to_string(), AttrValue::from(self.keyword(key)));
        }
        attrs.insert("llcrnrlat".to_string(), self.corners.ll_lat().into());
        attrs.insert("urcrnrlat".to_string(), self.corners.ur_lat().into());
        attrs.insert("llcrnrlon".to_string(), self.corners.ll_lon().into());
        attrs.insert("urcrnrlon".to_string(), self.corners.ur_lon().into());
        attrs.insert("rsphere".to_string(), self.rsphere.into());
        attrs.insert("resolution".to_string(), self.resolution.as_str().into());
        attrs
    }
}
