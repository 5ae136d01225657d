//! NGL map resources.
//!
//! NGL plots are configured through `mp*` resources. Limits always use the
//! "Corners" mode with the domain's lower-left and upper-right points.

use super::AttrMap;
use serde::{Deserialize, Serialize};
use wrf_common::CornerBox;

const DATABASE_VERSION: &str = "MediumRes";
const LIMIT_MODE: &str = "Corners";

/// `mpProjection` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NglProjection {
    LambertConformal,
    Mercator,
    Stereographic,
    CylindricalEquidistant,
}

impl NglProjection {
    pub fn as_str(&self) -> &'static str {
        match self {
            NglProjection::LambertConformal => "LambertConformal",
            NglProjection::Mercator => "Mercator",
            NglProjection::Stereographic => "Stereographic",
            NglProjection::CylindricalEquidistant => "CylindricalEquidistant",
        }
    }
}

/// Map resources for an NGL plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NglResources {
    pub projection: NglProjection,
    pub corners: CornerBox,
    pub center_lat: Option<f64>,
    pub center_lon: Option<f64>,
    pub lambert_meridian: Option<f64>,
    pub lambert_parallel_1: Option<f64>,
    pub lambert_parallel_2: Option<f64>,
}

impl NglResources {
    pub fn new(projection: NglProjection, corners: CornerBox) -> Self {
        Self {
            projection,
            corners,
            center_lat: None,
            center_lon: None,
            lambert_meridian: None,
            lambert_parallel_1: None,
            lambert_parallel_2: None,
        }
    }

    /// Flatten into `mp*` resource names.
    ///
    /// Optional resources are left out when unset so NGL keeps its defaults.
    pub fn to_attrs(&self) -> AttrMap {
        let mut attrs = AttrMap::new();
        attrs.insert("mpProjection".to_string(), self.projection.as_str().into());
        attrs.insert("mpDataBaseVersion".to_string(), DATABASE_VERSION.into());
        attrs.insert("mpLimitMode".to_string(), LIMIT_MODE.into());
        attrs.insert("mpLeftCornerLonF".to_string(), self.corners.ll_lon().into());
        attrs.insert("mpLeftCornerLatF".to_string(), self.corners.ll_lat().into());
        attrs.insert("mpRightCornerLonF".to_string(), self.corners.ur_lon().into());
        attrs.insert("mpRightCornerLatF".to_string(), self.corners.ur_lat().into());

        let optional = [
            ("mpCenterLatF", self.center_lat),
            ("mpCenterLonF", self.center_lon),
            ("mpLambertMeridianF", self.lambert_meridian),
            ("mpLambertParallel1F", self.lambert_parallel_1),
            ("mpLambertParallel2F", self.lambert_parallel_2),
        ];
        for (key, value) in optional {
            if let Some(v) = value {
                attrs.insert(key.to_string(), v.into());
            }
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrf_common::CoordPair;

    #[test]
    fn test_to_attrs() {
        let corners = CornerBox::new(CoordPair::new(-40.0, 100.0), CoordPair::new(-10.0, 160.0));
        let mut res = NglResources::new(NglProjection::Mercator, corners);
        res.center_lat = Some(0.0);
        res.center_lon = Some(130.0);

        let attrs = res.to_attrs();
        assert_eq!(attrs["mpProjection"].as_str(), Some("Mercator"));
        assert_eq!(attrs["mpDataBaseVersion"].as_str(), Some("MediumRes"));
        assert_eq!(attrs["mpLimitMode"].as_str(), Some("Corners"));
        assert_eq!(attrs["mpLeftCornerLatF"].as_f64(), Some(-40.0));
        assert_eq!(attrs["mpRightCornerLonF"].as_f64(), Some(160.0));
        assert_eq!(attrs["mpCenterLatF"].as_f64(), Some(0.0));
        assert!(!attrs.contains_key("mpLambertMeridianF"));
    }
}
