//! Domain corner resolution.
//!
//! A domain's corners come either from explicit points or from the first and
//! last elements of its 2-D latitude/longitude grids. Exactly one source must
//! be given.

use crate::{CoordGrid, CoordPair, CornerError, CornerResult, Extent};
use serde::{Deserialize, Serialize};

/// Raw corner arguments as supplied by a caller.
///
/// Every field is optional so that incomplete or mixed input can be reported
/// as a [`CornerError`] instead of being unrepresentable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CornerInput {
    pub bottom_left: Option<CoordPair>,
    pub top_right: Option<CoordPair>,
    pub lats: Option<CoordGrid>,
    pub lons: Option<CoordGrid>,
}

impl CornerInput {
    /// Corners given as explicit points.
    pub fn corners(bottom_left: CoordPair, top_right: CoordPair) -> Self {
        Self {
            bottom_left: Some(bottom_left),
            top_right: Some(top_right),
            ..Default::default()
        }
    }

    /// Corners taken from 2-D latitude and longitude grids.
    pub fn grids(lats: CoordGrid, lons: CoordGrid) -> Self {
        Self {
            lats: Some(lats),
            lons: Some(lons),
            ..Default::default()
        }
    }

    /// Resolve into a [`CornerBox`].
    pub fn resolve(&self) -> CornerResult<CornerBox> {
        let has_points = self.bottom_left.is_some() || self.top_right.is_some();
        let has_grids = self.lats.is_some() || self.lons.is_some();

        match (self.bottom_left, self.top_right, &self.lats, &self.lons) {
            _ if has_points && has_grids => Err(CornerError::Ambiguous),
            (Some(bottom_left), Some(top_right), None, None) => Ok(CornerBox {
                bottom_left,
                top_right,
            }),
            (None, None, Some(lats), Some(lons)) => {
                let (ll_lat, ur_lat) = lats
                    .first()
                    .zip(lats.last())
                    .ok_or(CornerError::EmptyGrid("latitude"))?;
                let (ll_lon, ur_lon) = lons
                    .first()
                    .zip(lons.last())
                    .ok_or(CornerError::EmptyGrid("longitude"))?;
                Ok(CornerBox {
                    bottom_left: CoordPair::new(ll_lat, ll_lon),
                    top_right: CoordPair::new(ur_lat, ur_lon),
                })
            }
            _ => Err(CornerError::Missing),
        }
    }
}

/// The bottom-left and top-right corners of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerBox {
    pub bottom_left: CoordPair,
    pub top_right: CoordPair,
}

impl CornerBox {
    pub fn new(bottom_left: CoordPair, top_right: CoordPair) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    pub fn ll_lat(&self) -> f64 {
        self.bottom_left.lat
    }

    pub fn ll_lon(&self) -> f64 {
        self.bottom_left.lon
    }

    pub fn ur_lat(&self) -> f64 {
        self.top_right.lat
    }

    pub fn ur_lon(&self) -> f64 {
        self.top_right.lon
    }

    /// The corners read as plane coordinates: x from longitudes, y from
    /// latitudes, in corner order.
    pub fn as_extent(&self) -> Extent {
        Extent::new(
            [self.ll_lon(), self.ur_lon()],
            [self.ll_lat(), self.ur_lat()],
        )
    }
}

impl TryFrom<CornerInput> for CornerBox {
    type Error = CornerError;

    fn try_from(input: CornerInput) -> CornerResult<Self> {
        input.resolve()
    }
}

impl TryFrom<&CornerInput> for CornerBox {
    type Error = CornerError;

    fn try_from(input: &CornerInput) -> CornerResult<Self> {
        input.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(values: [f64; 4]) -> CoordGrid {
        CoordGrid::new(2, 2, values.to_vec()).unwrap()
    }

    #[test]
    fn test_explicit_corners() {
        let input = CornerInput::corners(CoordPair::new(20.0, -120.0), CoordPair::new(50.0, -70.0));
        let corners = CornerBox::try_from(input).unwrap();
        assert_eq!(corners.ll_lat(), 20.0);
        assert_eq!(corners.ur_lon(), -70.0);
    }

    #[test]
    fn test_grid_corners() {
        let input = CornerInput::grids(
            grid([20.0, 20.5, 49.0, 50.0]),
            grid([-120.0, -70.0, -121.0, -69.0]),
        );
        let corners = input.resolve().unwrap();
        assert_eq!(corners.bottom_left, CoordPair::new(20.0, -120.0));
        assert_eq!(corners.top_right, CoordPair::new(50.0, -69.0));
    }

    #[test]
    fn test_neither_is_error() {
        assert_eq!(CornerInput::default().resolve(), Err(CornerError::Missing));
    }

    #[test]
    fn test_half_pair_is_error() {
        let input = CornerInput {
            bottom_left: Some(CoordPair::new(0.0, 0.0)),
            ..Default::default()
        };
        assert_eq!(input.resolve(), Err(CornerError::Missing));

        let input = CornerInput {
            lats: Some(grid([0.0; 4])),
            ..Default::default()
        };
        assert_eq!(input.resolve(), Err(CornerError::Missing));
    }

    #[test]
    fn test_mixed_is_error() {
        let mut input = CornerInput::corners(CoordPair::new(0.0, 0.0), CoordPair::new(1.0, 1.0));
        input.lats = Some(grid([0.0; 4]));
        input.lons = Some(grid([0.0; 4]));
        assert_eq!(input.resolve(), Err(CornerError::Ambiguous));
    }

    #[test]
    fn test_empty_grid_is_error() {
        let empty = CoordGrid::new(0, 0, Vec::new()).unwrap();
        let input = CornerInput::grids(empty, grid([0.0; 4]));
        assert_eq!(input.resolve(), Err(CornerError::EmptyGrid("latitude")));
    }

    #[test]
    fn test_as_extent_keeps_corner_order() {
        let corners = CornerBox::new(CoordPair::new(-10.0, 30.0), CoordPair::new(10.0, 60.0));
        let extent = corners.as_extent();
        assert_eq!(extent.x_limits, [30.0, 60.0]);
        assert_eq!(extent.y_limits, [-10.0, 10.0]);
    }
}
