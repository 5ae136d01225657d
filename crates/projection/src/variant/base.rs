//! State shared by every projection variant.

use crate::crs::Globe;
use crate::error::ProjectionResult;
use crate::params::ProjectionParameters;
use serde::Serialize;
use std::fmt;
use wrf_common::{CornerBox, CornerInput, Extent};

/// Parameters and corners of a WRF domain.
///
/// `moad_cen_lat` and `stand_lon` already carry the domain-center fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrfProj {
    params: ProjectionParameters,
    corners: CornerBox,
}

impl WrfProj {
    /// Resolve the corners and normalize the parameters.
    pub fn new(corners: &CornerInput, params: ProjectionParameters) -> ProjectionResult<Self> {
        Ok(Self::from_corners(corners.resolve()?, params))
    }

    /// Build from already-resolved corners.
    pub fn from_corners(corners: CornerBox, params: ProjectionParameters) -> Self {
        Self {
            params: params.with_center_fallbacks(),
            corners,
        }
    }

    pub fn params(&self) -> &ProjectionParameters {
        &self.params
    }

    pub fn corners(&self) -> &CornerBox {
        &self.corners
    }

    pub fn truelat1(&self) -> Option<f64> {
        self.params.truelat1
    }

    pub fn truelat2(&self) -> Option<f64> {
        self.params.truelat2
    }

    pub fn moad_cen_lat(&self) -> Option<f64> {
        self.params.moad_cen_lat
    }

    pub fn stand_lon(&self) -> Option<f64> {
        self.params.stand_lon
    }

    pub fn pole_lat(&self) -> Option<f64> {
        self.params.pole_lat
    }

    pub fn pole_lon(&self) -> Option<f64> {
        self.params.pole_lon
    }

    pub fn dx(&self) -> Option<f64> {
        self.params.dx
    }

    pub fn dy(&self) -> Option<f64> {
        self.params.dy
    }

    /// The raw corners read as plane coordinates.
    pub fn corner_extent(&self) -> Extent {
        self.corners.as_extent()
    }

    pub fn globe(&self) -> Globe {
        Globe::wrf()
    }

    /// Write `Name(bottom_left=..., ...)`.
    pub(crate) fn describe(&self, f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
        write!(
            f,
            "{}(bottom_left={}, top_right={}, stand_lon={}, moad_cen_lat={}, \
             truelat1={}, truelat2={}, pole_lat={}, pole_lon={})",
            name,
            self.corners.bottom_left,
            self.corners.top_right,
            OptFmt(self.stand_lon()),
            OptFmt(self.moad_cen_lat()),
            OptFmt(self.truelat1()),
            OptFmt(self.truelat2()),
            OptFmt(self.pole_lat()),
            OptFmt(self.pole_lon()),
        )
    }
}

struct OptFmt(Option<f64>);

impl fmt::Display for OptFmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{:?}", v),
            None => write!(f, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;
    use wrf_common::{CoordPair, CornerError};

    #[test]
    fn test_center_fallbacks_applied() {
        let params = ProjectionParameters::from_attrs([("CEN_LAT", 12.0), ("CEN_LON", 45.0)]);
        let corners = CornerInput::corners(CoordPair::new(10.0, 40.0), CoordPair::new(14.0, 50.0));
        let base = WrfProj::new(&corners, params).unwrap();
        assert_eq!(base.moad_cen_lat(), Some(12.0));
        assert_eq!(base.stand_lon(), Some(45.0));
    }

    #[test]
    fn test_missing_corners_fail() {
        let err = WrfProj::new(&CornerInput::default(), ProjectionParameters::default()).unwrap_err();
        assert_eq!(err, ProjectionError::Corners(CornerError::Missing));
    }

    #[test]
    fn test_corner_extent() {
        let corners = CornerBox::new(CoordPair::new(10.0, 40.0), CoordPair::new(14.0, 50.0));
        let base = WrfProj::from_corners(corners, ProjectionParameters::default());
        let extent = base.corner_extent();
        assert_eq!(extent.x_limits, [40.0, 50.0]);
        assert_eq!(extent.y_limits, [10.0, 14.0]);
    }
}
