//! Synthetic XLAT/XLONG-style grids.

use wrf_common::{CoordGrid, CoordPair};

/// Creates 2-D latitude and longitude grids spanning two corners.
///
/// Values are linearly spaced: the first element of each grid is the
/// bottom-left corner and the last element is the top-right corner, matching
/// how WRF lays out `XLAT`/`XLONG` (row 0 is the southern edge).
///
/// # Example
///
/// ```
/// use test_utils::lat_lon_grids;
/// use wrf_common::CoordPair;
///
/// let (lats, lons) = lat_lon_grids(CoordPair::new(10.0, -20.0), CoordPair::new(30.0, 20.0), 5, 3);
/// assert_eq!(lats.len(), 15);
/// assert_eq!(lats.first(), Some(10.0));
/// assert_eq!(lons.last(), Some(20.0));
/// ```
pub fn lat_lon_grids(
    bottom_left: CoordPair,
    top_right: CoordPair,
    nx: usize,
    ny: usize,
) -> (CoordGrid, CoordGrid) {
    let mut lats = Vec::with_capacity(nx * ny);
    let mut lons = Vec::with_capacity(nx * ny);

    for j in 0..ny {
        let lat = lerp(bottom_left.lat, top_right.lat, j, ny);
        for i in 0..nx {
            lats.push(lat);
            lons.push(lerp(bottom_left.lon, top_right.lon, i, nx));
        }
    }

    (
        CoordGrid::new(nx, ny, lats).expect("latitude grid size"),
        CoordGrid::new(nx, ny, lons).expect("longitude grid size"),
    )
}

/// A grid with no points.
pub fn empty_grid() -> CoordGrid {
    CoordGrid::new(0, 0, Vec::new()).expect("empty grid")
}

fn lerp(start: f64, end: f64, index: usize, count: usize) -> f64 {
    if count <= 1 {
        return start;
    }
    if index + 1 == count {
        return end;
    }
    start + (end - start) * index as f64 / (count - 1) as f64
}
