//! Projection construction from WRF attributes.

use crate::error::ProjectionResult;
use crate::params::{ProjectionParameters, ProjectionType};
use crate::variant::{
    LambertConformal, LatLon, Mercator, PolarStereographic, RotatedLatLon, WrfProj, WrfProjection,
};
use tracing::{debug, warn};
use wrf_common::CornerInput;

/// Build the projection for a domain from its global attributes.
///
/// Attribute keys are matched case-insensitively. `MAP_PROJ` defaults to 0.
/// Codes 0 and 6 give [`WrfProjection::LatLon`] only when `POLE_LAT` is 90 and
/// `POLE_LON` is 0; any other pole position is a rotated grid. Unsupported
/// codes give [`WrfProjection::Unknown`].
pub fn get_projection<K>(
    corners: &CornerInput,
    attrs: impl IntoIterator<Item = (K, f64)>,
) -> ProjectionResult<WrfProjection>
where
    K: AsRef<str>,
{
    projection_from_params(corners, ProjectionParameters::from_attrs(attrs))
}

/// Build the projection from already-normalized parameters.
pub fn projection_from_params(
    corners: &CornerInput,
    params: ProjectionParameters,
) -> ProjectionResult<WrfProjection> {
    let base = WrfProj::new(corners, params)?;
    let proj_type = params.projection_type();

    let projection = match proj_type {
        ProjectionType::LambertConformal => {
            WrfProjection::LambertConformal(LambertConformal::new(base))
        }
        ProjectionType::PolarStereographic => {
            WrfProjection::PolarStereographic(PolarStereographic::new(base))
        }
        ProjectionType::Mercator => WrfProjection::Mercator(Mercator::new(base)),
        ProjectionType::Zero | ProjectionType::LatLon => {
            if params.pole_lat == Some(90.0) && params.pole_lon == Some(0.0) {
                WrfProjection::LatLon(LatLon::new(base))
            } else {
                WrfProjection::RotatedLatLon(RotatedLatLon::new(base))
            }
        }
        ProjectionType::Other(code) => {
            warn!(code, "Unsupported MAP_PROJ, projection outputs unavailable");
            WrfProjection::Unknown(base)
        }
    };

    debug!(%proj_type, kind = projection.kind(), "Built projection");

    Ok(projection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrf_common::CoordPair;

    fn corners() -> CornerInput {
        CornerInput::corners(CoordPair::new(20.0, -120.0), CoordPair::new(50.0, -70.0))
    }

    fn kind(attrs: &[(&str, f64)]) -> &'static str {
        get_projection(&corners(), attrs.iter().copied())
            .unwrap()
            .kind()
    }

    #[test]
    fn test_dispatch_by_code() {
        assert_eq!(kind(&[("MAP_PROJ", 1.0)]), "LambertConformal");
        assert_eq!(kind(&[("MAP_PROJ", 2.0)]), "PolarStereographic");
        assert_eq!(kind(&[("MAP_PROJ", 3.0)]), "Mercator");
        assert_eq!(kind(&[("MAP_PROJ", 4.0)]), "WrfProj");
        assert_eq!(kind(&[("MAP_PROJ", 2.5)]), "WrfProj");
    }

    #[test]
    fn test_lat_lon_requires_geographic_pole() {
        let geographic = [("MAP_PROJ", 6.0), ("POLE_LAT", 90.0), ("POLE_LON", 0.0)];
        assert_eq!(kind(&geographic), "LatLon");

        let rotated = [("MAP_PROJ", 6.0), ("POLE_LAT", 36.0), ("POLE_LON", 0.0)];
        assert_eq!(kind(&rotated), "RotatedLatLon");

        assert_eq!(kind(&[("MAP_PROJ", 6.0)]), "RotatedLatLon");
    }

    #[test]
    fn test_missing_map_proj_is_zero() {
        assert_eq!(kind(&[("POLE_LAT", 90.0), ("POLE_LON", 0.0)]), "LatLon");
        assert_eq!(kind(&[]), "RotatedLatLon");
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        assert_eq!(kind(&[("map_proj", 1.0)]), "LambertConformal");
    }

    #[test]
    fn test_corner_errors_propagate() {
        let err = get_projection(&CornerInput::default(), [("MAP_PROJ", 1.0)]).unwrap_err();
        assert!(err.to_string().starts_with("invalid corner point arguments"));
    }
}
