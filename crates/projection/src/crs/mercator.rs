//! Mercator CRS descriptions.
//!
//! The plain Mercator has no latitude of true scale. WRF domains with a
//! nonzero TRUELAT1 need [`MercatorWithLatTs`], which scales the plane by
//! `cos(lat_ts)` and recomputes its limits.

use super::{ForwardProjection, Globe, PlaneTransform};
use crate::error::ProjectionResult;
use crate::formats::Proj4Builder;
use serde::Serialize;
use tracing::warn;

const DEFAULT_MIN_LATITUDE: f64 = -80.0;
const DEFAULT_MAX_LATITUDE: f64 = 84.0;

/// Plain Mercator (Cartopy `Mercator`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MercatorCrs {
    pub central_longitude: f64,
    pub globe: Globe,
}

impl MercatorCrs {
    pub fn new(central_longitude: Option<f64>, globe: Globe) -> Self {
        Self {
            central_longitude: central_longitude.unwrap_or(0.0),
            globe,
        }
    }
}

/// Mercator with a latitude of true scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MercatorWithLatTs {
    pub central_longitude: f64,
    pub latitude_true_scale: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub globe: Globe,
    pub x_limits: [f64; 2],
    pub y_limits: [f64; 2],
    /// Resampling threshold: 1/720 of the x range
    pub threshold: f64,
}

impl MercatorWithLatTs {
    /// Build with the default latitude range (-80 to 84).
    pub fn new(
        central_longitude: Option<f64>,
        latitude_true_scale: f64,
        globe: Globe,
    ) -> ProjectionResult<Self> {
        Self::with_latitude_range(
            central_longitude,
            latitude_true_scale,
            DEFAULT_MIN_LATITUDE,
            DEFAULT_MAX_LATITUDE,
            globe,
        )
    }

    /// Build and compute the plane limits from the extreme points
    /// (central ± 180, min/max latitude).
    pub fn with_latitude_range(
        central_longitude: Option<f64>,
        latitude_true_scale: f64,
        min_latitude: f64,
        max_latitude: f64,
        globe: Globe,
    ) -> ProjectionResult<Self> {
        let central_longitude = central_longitude.unwrap_or(0.0);
        let plane = PlaneTransform::from_descriptor(&descriptor(
            central_longitude,
            latitude_true_scale,
            globe,
        ))?;

        let (x0, y0) = plane.project(central_longitude - 180.0, min_latitude)?;
        let (x1, y1) = plane.project(central_longitude + 180.0, max_latitude)?;

        let x_limits = separate_x_limits([x0, x1]);
        let threshold = (x_limits[1] - x_limits[0]) / 720.0;

        Ok(Self {
            central_longitude,
            latitude_true_scale,
            min_latitude,
            max_latitude,
            globe,
            x_limits,
            y_limits: [y0, y1],
            threshold,
        })
    }
}

fn descriptor(central_longitude: f64, latitude_true_scale: f64, globe: Globe) -> String {
    Proj4Builder::new("merc")
        .value("a", globe.semimajor_axis)
        .value("b", globe.semiminor_axis)
        .value("lon_0", central_longitude)
        .value("lat_ts", latitude_true_scale)
        .build()
}

/// Force coincident left/right limits apart.
///
/// When both limits land on the same value, whichever one is non-negative is
/// negated. Distinct limits are returned unchanged. The extreme points sit at
/// exactly ±180 from the central meridian and keep their sign through the
/// transform, so limits built by [`MercatorWithLatTs`] are not expected to
/// coincide; this is a safeguard rather than a path normal construction takes.
pub fn separate_x_limits(mut limits: [f64; 2]) -> [f64; 2] {
    if limits[0] == limits[1] {
        warn!(limit = limits[0], "Mercator x limits coincide; negating one");
        if limits[0] < 0.0 {
            limits[1] = -limits[1];
        } else {
            limits[0] = -limits[0];
        }
    }
    limits
}
