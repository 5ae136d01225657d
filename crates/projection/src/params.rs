//! WRF projection attributes.
//!
//! WRF writes its map projection as global attributes (`MAP_PROJ`, `TRUELAT1`,
//! `STAND_LON`, ...). Attribute names are matched case-insensitively and every
//! value stays an explicit `Option`: a missing attribute is never read as 0.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Earth radius used by WRF's spherical projections (meters).
pub const WRF_EARTH_RADIUS: f64 = 6_370_000.0;

/// Return a copy of `attrs` with every key upper-cased.
pub fn keys_to_upper<K, V>(attrs: impl IntoIterator<Item = (K, V)>) -> HashMap<String, V>
where
    K: AsRef<str>,
{
    attrs
        .into_iter()
        .map(|(key, value)| (key.as_ref().to_uppercase(), value))
        .collect()
}

/// True when a latitude-like value is absent or outside [-90, 90].
pub fn is_missing(val: Option<f64>) -> bool {
    match val {
        None => true,
        Some(v) => !(-90.0..=90.0).contains(&v),
    }
}

/// WRF `MAP_PROJ` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectionType {
    /// Code 0: lat/lon used by some global configurations
    Zero,
    /// Code 1
    LambertConformal,
    /// Code 2
    PolarStereographic,
    /// Code 3
    Mercator,
    /// Code 6: cylindrical equidistant, possibly rotated
    LatLon,
    /// Any other code
    Other(i64),
}

impl ProjectionType {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => ProjectionType::Zero,
            1 => ProjectionType::LambertConformal,
            2 => ProjectionType::PolarStereographic,
            3 => ProjectionType::Mercator,
            6 => ProjectionType::LatLon,
            other => ProjectionType::Other(other),
        }
    }

    /// Interpret an attribute value as a code.
    ///
    /// Attributes arrive as floats; non-integral values are not valid codes and
    /// map to `Other(i64::MIN)`.
    pub fn from_value(value: f64) -> Self {
        if value.fract() == 0.0 && value.is_finite() {
            Self::from_code(value as i64)
        } else {
            ProjectionType::Other(i64::MIN)
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ProjectionType::Zero => 0,
            ProjectionType::LambertConformal => 1,
            ProjectionType::PolarStereographic => 2,
            ProjectionType::Mercator => 3,
            ProjectionType::LatLon => 6,
            ProjectionType::Other(code) => *code,
        }
    }
}

impl fmt::Display for ProjectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionType::Zero => write!(f, "lat-lon (0)"),
            ProjectionType::LambertConformal => write!(f, "lambert conformal (1)"),
            ProjectionType::PolarStereographic => write!(f, "polar stereographic (2)"),
            ProjectionType::Mercator => write!(f, "mercator (3)"),
            ProjectionType::LatLon => write!(f, "lat-lon (6)"),
            ProjectionType::Other(code) => write!(f, "unknown ({})", code),
        }
    }
}

/// Normalized projection attributes.
///
/// `truelat2` is already cleared when the source value is out of range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParameters {
    pub map_proj: Option<ProjectionType>,
    /// Domain (nest) center latitude, not necessarily the projection center
    pub cen_lat: Option<f64>,
    /// Domain (nest) center longitude
    pub cen_lon: Option<f64>,
    pub truelat1: Option<f64>,
    pub truelat2: Option<f64>,
    pub moad_cen_lat: Option<f64>,
    pub stand_lon: Option<f64>,
    pub pole_lat: Option<f64>,
    pub pole_lon: Option<f64>,
    pub dx: Option<f64>,
    pub dy: Option<f64>,
}

impl ProjectionParameters {
    /// Extract parameters from a raw attribute bag.
    ///
    /// Keys are matched case-insensitively; unknown keys are ignored.
    pub fn from_attrs<K>(attrs: impl IntoIterator<Item = (K, f64)>) -> Self
    where
        K: AsRef<str>,
    {
        let attrs = keys_to_upper(attrs);
        let get = |key: &str| attrs.get(key).copied();

        let truelat2 = get("TRUELAT2");

        Self {
            map_proj: get("MAP_PROJ").map(ProjectionType::from_value),
            cen_lat: get("CEN_LAT"),
            cen_lon: get("CEN_LON"),
            truelat1: get("TRUELAT1"),
            truelat2: if is_missing(truelat2) { None } else { truelat2 },
            moad_cen_lat: get("MOAD_CEN_LAT"),
            stand_lon: get("STAND_LON"),
            pole_lat: get("POLE_LAT"),
            pole_lon: get("POLE_LON"),
            dx: get("DX"),
            dy: get("DY"),
        }
    }

    /// The projection code, defaulting to 0 when `MAP_PROJ` is absent.
    pub fn projection_type(&self) -> ProjectionType {
        self.map_proj.unwrap_or(ProjectionType::Zero)
    }

    /// Apply the domain-center fallbacks for `moad_cen_lat` and `stand_lon`.
    pub(crate) fn with_center_fallbacks(mut self) -> Self {
        if self.moad_cen_lat.is_none() {
            self.moad_cen_lat = self.cen_lat;
        }
        if self.stand_lon.is_none() {
            self.stand_lon = self.cen_lon;
        }
        self
    }
}
