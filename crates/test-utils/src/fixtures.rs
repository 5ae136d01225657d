//! Common test fixtures for WRF projection tests.
//!
//! Each fixture is the subset of global attributes a WRF output file carries
//! for its map projection, plus the domain's corner points.

use wrf_common::CornerInput;

use crate::generators::lat_lon_grids;

/// A WRF domain: projection attributes and corners.
#[derive(Debug, Clone, Copy)]
pub struct DomainFixture {
    pub name: &'static str,
    pub attrs: &'static [(&'static str, f64)],
    /// (lat, lon) of the bottom-left grid point
    pub bottom_left: (f64, f64),
    /// (lat, lon) of the top-right grid point
    pub top_right: (f64, f64),
}

impl DomainFixture {
    /// Corners given as explicit points.
    pub fn corners(&self) -> CornerInput {
        CornerInput::corners(self.bottom_left.into(), self.top_right.into())
    }

    /// Corners given as synthetic `nx` x `ny` lat/lon grids.
    pub fn grids(&self, nx: usize, ny: usize) -> CornerInput {
        let (lats, lons) = lat_lon_grids(self.bottom_left.into(), self.top_right.into(), nx, ny);
        CornerInput::grids(lats, lons)
    }

    /// Attributes with `key` replaced (or added).
    pub fn attrs_with(&self, key: &'static str, value: f64) -> Vec<(&'static str, f64)> {
        let mut attrs: Vec<_> = self.attrs.iter().copied().filter(|(k, _)| *k != key).collect();
        attrs.push((key, value));
        attrs
    }

    /// Attributes with `key` removed.
    pub fn attrs_without(&self, key: &str) -> Vec<(&'static str, f64)> {
        self.attrs.iter().copied().filter(|(k, _)| *k != key).collect()
    }
}

/// Representative WRF domains, one or two per projection.
pub mod domains {
    use super::DomainFixture;

    /// CONUS Lambert domain with two standard parallels.
    pub const LAMBERT_CONUS: DomainFixture = DomainFixture {
        name: "lambert_conus",
        attrs: &[
            ("MAP_PROJ", 1.0),
            ("TRUELAT1", 30.0),
            ("TRUELAT2", 60.0),
            ("MOAD_CEN_LAT", 39.0),
            ("STAND_LON", -98.0),
            ("CEN_LAT", 39.0),
            ("CEN_LON", -98.0),
            ("POLE_LAT", 90.0),
            ("POLE_LON", 0.0),
            ("DX", 30000.0),
            ("DY", 30000.0),
        ],
        bottom_left: (21.138, -122.72),
        top_right: (47.843, -60.918),
    };

    /// Tangent Lambert cone: TRUELAT2 is a fill value.
    pub const LAMBERT_TANGENT: DomainFixture = DomainFixture {
        name: "lambert_tangent",
        attrs: &[
            ("MAP_PROJ", 1.0),
            ("TRUELAT1", 45.0),
            ("TRUELAT2", -999.0),
            ("MOAD_CEN_LAT", 45.0),
            ("STAND_LON", 10.0),
            ("POLE_LAT", 90.0),
            ("POLE_LON", 0.0),
            ("DX", 12000.0),
            ("DY", 12000.0),
        ],
        bottom_left: (38.0, -2.0),
        top_right: (52.0, 24.0),
    };

    /// Tropical Mercator domain with TRUELAT1 = 0.
    pub const MERCATOR_TROPICS: DomainFixture = DomainFixture {
        name: "mercator_tropics",
        attrs: &[
            ("MAP_PROJ", 3.0),
            ("TRUELAT1", 0.0),
            ("MOAD_CEN_LAT", 5.0),
            ("STAND_LON", 110.0),
            ("POLE_LAT", 90.0),
            ("POLE_LON", 0.0),
            ("DX", 27000.0),
            ("DY", 27000.0),
        ],
        bottom_left: (-10.0, 90.0),
        top_right: (20.0, 130.0),
    };

    /// Mercator domain over Hawaii with a true-scale latitude.
    pub const MERCATOR_HAWAII: DomainFixture = DomainFixture {
        name: "mercator_hawaii",
        attrs: &[
            ("MAP_PROJ", 3.0),
            ("TRUELAT1", 20.0),
            ("MOAD_CEN_LAT", 20.0),
            ("STAND_LON", -157.0),
            ("POLE_LAT", 90.0),
            ("POLE_LON", 0.0),
            ("DX", 3000.0),
            ("DY", 3000.0),
        ],
        bottom_left: (16.0, -163.0),
        top_right: (24.0, -151.0),
    };

    /// Alaska polar stereographic domain.
    pub const POLAR_ALASKA: DomainFixture = DomainFixture {
        name: "polar_alaska",
        attrs: &[
            ("MAP_PROJ", 2.0),
            ("TRUELAT1", 60.0),
            ("TRUELAT2", 90.0),
            ("MOAD_CEN_LAT", 63.0),
            ("STAND_LON", -150.0),
            ("POLE_LAT", 90.0),
            ("POLE_LON", 0.0),
            ("DX", 9000.0),
            ("DY", 9000.0),
        ],
        bottom_left: (50.0, -175.0),
        top_right: (68.0, -120.0),
    };

    /// Antarctic polar stereographic domain.
    pub const POLAR_ANTARCTIC: DomainFixture = DomainFixture {
        name: "polar_antarctic",
        attrs: &[
            ("MAP_PROJ", 2.0),
            ("TRUELAT1", -71.0),
            ("MOAD_CEN_LAT", -80.0),
            ("STAND_LON", 0.0),
            ("POLE_LAT", 90.0),
            ("POLE_LON", 0.0),
            ("DX", 25000.0),
            ("DY", 25000.0),
        ],
        bottom_left: (-55.0, -135.0),
        top_right: (-55.0, 45.0),
    };

    /// Global cylindrical equidistant domain.
    pub const LATLON_GLOBAL: DomainFixture = DomainFixture {
        name: "latlon_global",
        attrs: &[
            ("MAP_PROJ", 6.0),
            ("MOAD_CEN_LAT", 0.0),
            ("STAND_LON", 0.0),
            ("POLE_LAT", 90.0),
            ("POLE_LON", 0.0),
            ("DX", 111194.9),
            ("DY", 111194.9),
        ],
        bottom_left: (-89.5, -179.5),
        top_right: (89.5, 179.5),
    };

    /// Rotated grid centered on 40N 100W, WPS northern-hemisphere convention.
    pub const ROTATED_NORTH: DomainFixture = DomainFixture {
        name: "rotated_north",
        attrs: &[
            ("MAP_PROJ", 6.0),
            ("MOAD_CEN_LAT", 40.0),
            ("STAND_LON", 100.0),
            ("POLE_LAT", 50.0),
            ("POLE_LON", 180.0),
            ("DX", 0.25),
            ("DY", 0.25),
        ],
        bottom_left: (30.0, -115.0),
        top_right: (50.0, -85.0),
    };

    /// Rotated grid over Patagonia, WPS southern-hemisphere convention.
    pub const ROTATED_SOUTH: DomainFixture = DomainFixture {
        name: "rotated_south",
        attrs: &[
            ("MAP_PROJ", 6.0),
            ("MOAD_CEN_LAT", -54.0),
            ("STAND_LON", -106.0),
            ("POLE_LAT", 36.0),
            ("POLE_LON", 0.0),
            ("DX", 0.2),
            ("DY", 0.2),
        ],
        bottom_left: (-64.0, -90.0),
        top_right: (-44.0, -58.0),
    };

    /// Gaussian grid (`MAP_PROJ = 4`), which has no specialized outputs.
    pub const GAUSSIAN: DomainFixture = DomainFixture {
        name: "gaussian",
        attrs: &[
            ("MAP_PROJ", 4.0),
            ("CEN_LAT", 0.0),
            ("CEN_LON", 0.0),
            ("DX", 0.0),
            ("DY", 0.0),
        ],
        bottom_left: (-88.9, -180.0),
        top_right: (88.9, 178.1),
    };

    pub const ALL: [DomainFixture; 10] = [
        LAMBERT_CONUS,
        LAMBERT_TANGENT,
        MERCATOR_TROPICS,
        MERCATOR_HAWAII,
        POLAR_ALASKA,
        POLAR_ANTARCTIC,
        LATLON_GLOBAL,
        ROTATED_NORTH,
        ROTATED_SOUTH,
        GAUSSIAN,
    ];
}

/// Float tolerances for comparisons.
pub mod tolerance {
    /// Degrees
    pub const DEGREES: f64 = 1e-9;
    /// Projected meters
    pub const METERS: f64 = 1e-3;
}
