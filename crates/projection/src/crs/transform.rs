//! Forward transforms backed by `proj4rs`.
//!
//! A [`PlaneTransform`] takes a PROJ descriptor as produced by the variants
//! and projects WRF-sphere lon/lat degrees onto its plane.

use super::ForwardProjection;
use crate::error::{ProjectionError, ProjectionResult};
use crate::formats::proj4::{self, Proj4Builder};
use crate::params::WRF_EARTH_RADIUS;
use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use std::fmt;

/// Unit names accepted in descriptors but unknown to `proj4rs`.
const UNIT_ALIASES: [(&str, &str); 2] = [("meters", "m"), ("meter", "m")];

/// Lon/lat on the WRF sphere to a projected plane.
#[derive(Clone)]
pub struct PlaneTransform {
    descriptor: String,
    geographic: Proj,
    plane: Proj,
}

impl fmt::Debug for PlaneTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaneTransform")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

impl PlaneTransform {
    /// Set up a transform for a descriptor.
    ///
    /// Fails when `proj4rs` rejects the descriptor, e.g. a conic projection
    /// whose standard parallels mirror each other across the equator.
    pub fn from_descriptor(descriptor: &str) -> ProjectionResult<Self> {
        let plane = Proj::from_proj_string(&normalize_units(descriptor))
            .map_err(|e| ProjectionError::transform(descriptor, e))?;

        let geographic_def = Proj4Builder::new("latlong")
            .sphere(WRF_EARTH_RADIUS)
            .build();
        let geographic = Proj::from_proj_string(&geographic_def)
            .map_err(|e| ProjectionError::transform(&geographic_def, e))?;

        Ok(Self {
            descriptor: descriptor.to_string(),
            geographic,
            plane,
        })
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

impl ForwardProjection for PlaneTransform {
    fn project(&self, lon: f64, lat: f64) -> ProjectionResult<(f64, f64)> {
        // proj4rs works in radians for geographic coordinates
        let mut point = (lon.to_radians(), lat.to_radians(), 0.0);
        transform(&self.geographic, &self.plane, &mut point)
            .map_err(|e| ProjectionError::transform(&self.descriptor, e))?;

        if point.0.is_finite() && point.1.is_finite() {
            Ok((point.0, point.1))
        } else {
            Err(ProjectionError::transform(
                &self.descriptor,
                format!("({}, {}) has no finite image", lon, lat),
            ))
        }
    }
}

/// Rewrite `+units=` values `proj4rs` only knows by their short id.
fn normalize_units(descriptor: &str) -> String {
    proj4::parse(descriptor)
        .into_iter()
        .map(|(key, value)| {
            let value = if key == "units" {
                UNIT_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == value)
                    .map_or(value, |(_, id)| *id)
            } else {
                value
            };
            if value.is_empty() {
                format!("+{}", key)
            } else {
                format!("+{}={}", key, value)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
