//! Projection variants and the capability-checked output accessors.

pub mod base;
pub mod lambert;
pub mod latlon;
pub mod mercator;
pub mod polar;
pub mod rotated;

pub use base::WrfProj;
pub use lambert::LambertConformal;
pub use latlon::LatLon;
pub use mercator::Mercator;
pub use polar::PolarStereographic;
pub use rotated::{Hemisphere, RotatedLatLon};

use crate::capability::{Capability, CapabilityProvider};
use crate::crs::CartopyCrs;
use crate::error::{ProjectionError, ProjectionResult};
use crate::formats::{BasemapParams, BasemapResolution, CfAttributes, NglResources};
use serde::Serialize;
use std::fmt;
use tracing::debug;
use wrf_common::Extent;

/// The projection of a WRF domain.
///
/// `Unknown` covers unsupported projection codes: it keeps the parameters and
/// corners but has no specialized outputs. `Null` stands in when several
/// domains with different projections are combined.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "projection")]
pub enum WrfProjection {
    Unknown(WrfProj),
    LambertConformal(LambertConformal),
    Mercator(Mercator),
    PolarStereographic(PolarStereographic),
    LatLon(LatLon),
    RotatedLatLon(RotatedLatLon),
    Null,
}

impl WrfProjection {
    pub fn kind(&self) -> &'static str {
        match self {
            WrfProjection::Unknown(_) => "WrfProj",
            WrfProjection::LambertConformal(_) => "LambertConformal",
            WrfProjection::Mercator(_) => "Mercator",
            WrfProjection::PolarStereographic(_) => "PolarStereographic",
            WrfProjection::LatLon(_) => "LatLon",
            WrfProjection::RotatedLatLon(_) => "RotatedLatLon",
            WrfProjection::Null => "NullProjection",
        }
    }

    /// Shared parameters and corners; `None` for [`WrfProjection::Null`].
    pub fn base(&self) -> Option<&WrfProj> {
        match self {
            WrfProjection::Unknown(p) => Some(p),
            WrfProjection::LambertConformal(p) => Some(p.base()),
            WrfProjection::Mercator(p) => Some(p.base()),
            WrfProjection::PolarStereographic(p) => Some(p.base()),
            WrfProjection::LatLon(p) => Some(p.base()),
            WrfProjection::RotatedLatLon(p) => Some(p.base()),
            WrfProjection::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, WrfProjection::Null)
    }

    /// PROJ descriptor string.
    pub fn proj4<C>(&self, caps: &C) -> ProjectionResult<Option<String>>
    where
        C: CapabilityProvider + ?Sized,
    {
        require(caps, Capability::Proj4)?;
        Ok(match self {
            WrfProjection::LambertConformal(p) => Some(p.proj4()),
            WrfProjection::Mercator(p) => Some(p.proj4()),
            WrfProjection::PolarStereographic(p) => Some(p.proj4()),
            WrfProjection::LatLon(p) => Some(p.proj4()),
            WrfProjection::RotatedLatLon(p) => Some(p.proj4()),
            WrfProjection::Unknown(_) | WrfProjection::Null => None,
        })
    }

    /// CF grid mapping attributes.
    pub fn cf<C>(&self, caps: &C) -> ProjectionResult<Option<CfAttributes>>
    where
        C: CapabilityProvider + ?Sized,
    {
        require(caps, Capability::Cf)?;
        Ok(match self {
            WrfProjection::LambertConformal(p) => Some(p.cf()),
            WrfProjection::Mercator(p) => Some(p.cf()),
            WrfProjection::PolarStereographic(p) => Some(p.cf()),
            WrfProjection::LatLon(p) => Some(p.cf()),
            WrfProjection::RotatedLatLon(p) => Some(p.cf()),
            WrfProjection::Unknown(_) | WrfProjection::Null => None,
        })
    }

    /// Basemap constructor keywords.
    pub fn basemap<C>(
        &self,
        caps: &C,
        resolution: BasemapResolution,
    ) -> ProjectionResult<Option<BasemapParams>>
    where
        C: CapabilityProvider + ?Sized,
    {
        require(caps, Capability::Basemap)?;
        Ok(match self {
            WrfProjection::LambertConformal(p) => Some(p.basemap(resolution)),
            WrfProjection::Mercator(p) => Some(p.basemap(resolution)),
            WrfProjection::PolarStereographic(p) => Some(p.basemap(resolution)),
            WrfProjection::LatLon(p) => Some(p.basemap(resolution)),
            WrfProjection::RotatedLatLon(p) => Some(p.basemap(resolution)),
            WrfProjection::Unknown(_) | WrfProjection::Null => None,
        })
    }

    /// Cartopy CRS description.
    pub fn cartopy<C>(&self, caps: &C) -> ProjectionResult<Option<CartopyCrs>>
    where
        C: CapabilityProvider + ?Sized,
    {
        require(caps, Capability::Cartopy)?;
        Ok(match self {
            WrfProjection::LambertConformal(p) => Some(p.cartopy()),
            WrfProjection::Mercator(p) => Some(p.cartopy()?),
            WrfProjection::PolarStereographic(p) => Some(p.cartopy()),
            WrfProjection::LatLon(p) => Some(p.cartopy()),
            WrfProjection::RotatedLatLon(p) => Some(p.cartopy()),
            WrfProjection::Unknown(_) | WrfProjection::Null => None,
        })
    }

    /// NGL map resources.
    pub fn ngl<C>(&self, caps: &C) -> ProjectionResult<Option<NglResources>>
    where
        C: CapabilityProvider + ?Sized,
    {
        require(caps, Capability::Ngl)?;
        Ok(match self {
            WrfProjection::LambertConformal(p) => Some(p.ngl()),
            WrfProjection::Mercator(p) => Some(p.ngl()),
            WrfProjection::PolarStereographic(p) => Some(p.ngl()),
            WrfProjection::LatLon(p) => Some(p.ngl()),
            WrfProjection::RotatedLatLon(p) => Some(p.ngl()),
            WrfProjection::Unknown(_) | WrfProjection::Null => None,
        })
    }

    /// Domain limits in the Cartopy projection plane.
    ///
    /// The unknown and lat/lon variants return their corners unchanged and
    /// need no capability. Lambert, Mercator and polar domains project their
    /// corners through their own PROJ descriptor; rotated domains through
    /// their rotated pole.
    pub fn cartopy_extent<C>(&self, caps: &C) -> ProjectionResult<Extent>
    where
        C: CapabilityProvider + ?Sized,
    {
        let extent = match self {
            WrfProjection::Null => return Err(ProjectionError::Undefined("extent")),
            WrfProjection::Unknown(p) => return Ok(p.corner_extent()),
            WrfProjection::LatLon(p) => return Ok(p.extent()),
            WrfProjection::LambertConformal(p) => {
                require(caps, Capability::Cartopy).and_then(|_| p.extent())?
            }
            WrfProjection::Mercator(p) => {
                require(caps, Capability::Cartopy).and_then(|_| p.extent())?
            }
            WrfProjection::PolarStereographic(p) => {
                require(caps, Capability::Cartopy).and_then(|_| p.extent())?
            }
            WrfProjection::RotatedLatLon(p) => {
                require(caps, Capability::Cartopy).and_then(|_| p.extent())?
            }
        };

        debug!(
            kind = self.kind(),
            x_limits = ?extent.x_limits,
            y_limits = ?extent.y_limits,
            "Projected domain corners"
        );
        Ok(extent)
    }

    /// `[x_min, x_max]` in the Cartopy plane.
    pub fn cartopy_xlim<C>(&self, caps: &C) -> ProjectionResult<[f64; 2]>
    where
        C: CapabilityProvider + ?Sized,
    {
        Ok(self.cartopy_extent(caps)?.x_limits)
    }

    /// `[y_min, y_max]` in the Cartopy plane.
    pub fn cartopy_ylim<C>(&self, caps: &C) -> ProjectionResult<[f64; 2]>
    where
        C: CapabilityProvider + ?Sized,
    {
        Ok(self.cartopy_extent(caps)?.y_limits)
    }

    /// The projection shared by every domain, or [`WrfProjection::Null`] when
    /// they differ or there are none.
    pub fn reconcile(projections: &[WrfProjection]) -> WrfProjection {
        match projections.split_first() {
            Some((first, rest)) if rest.iter().all(|p| p == first) => first.clone(),
            _ => {
                debug!(
                    count = projections.len(),
                    "Domains do not share a projection"
                );
                WrfProjection::Null
            }
        }
    }
}

fn require<C>(caps: &C, capability: Capability) -> ProjectionResult<()>
where
    C: CapabilityProvider + ?Sized,
{
    if caps.is_enabled(capability) {
        Ok(())
    } else {
        Err(ProjectionError::CapabilityUnavailable(capability))
    }
}

impl fmt::Display for WrfProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrfProjection::Unknown(p) => p.describe(f, "WrfProj"),
            WrfProjection::LambertConformal(p) => fmt::Display::fmt(p, f),
            WrfProjection::Mercator(p) => fmt::Display::fmt(p, f),
            WrfProjection::PolarStereographic(p) => fmt::Display::fmt(p, f),
            WrfProjection::LatLon(p) => fmt::Display::fmt(p, f),
            WrfProjection::RotatedLatLon(p) => fmt::Display::fmt(p, f),
            WrfProjection::Null => write!(f, "NullProjection()"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capabilities;
    use crate::params::ProjectionParameters;
    use wrf_common::{CoordPair, CornerBox};

    fn base(attrs: &[(&str, f64)]) -> WrfProj {
        let corners = CornerBox::new(CoordPair::new(10.0, -100.0), CoordPair::new(20.0, -80.0));
        WrfProj::from_corners(corners, ProjectionParameters::from_attrs(attrs.iter().copied()))
    }

    #[test]
    fn test_disabled_capability_fails() {
        let proj = WrfProjection::LatLon(LatLon::new(base(&[("STAND_LON", 0.0)])));
        let caps = Capabilities::all().without(Capability::Basemap);

        let err = proj.basemap(&caps, BasemapResolution::Low).unwrap_err();
        assert_eq!(err, ProjectionError::CapabilityUnavailable(Capability::Basemap));
        assert_eq!(err.to_string(), "'basemap' is not installed or is disabled");
        assert!(proj.cf(&caps).unwrap().is_some());
    }

    #[test]
    fn test_closure_provider() {
        let proj = WrfProjection::Unknown(base(&[]));
        let only_cf = |c: Capability| c == Capability::Cf;

        assert_eq!(proj.cf(&only_cf).unwrap(), None);
        assert!(proj.proj4(&only_cf).is_err());
    }

    #[test]
    fn test_unknown_outputs_are_none() {
        let proj = WrfProjection::Unknown(base(&[]));
        let caps = Capabilities::all();

        assert_eq!(proj.proj4(&caps).unwrap(), None);
        assert_eq!(proj.cf(&caps).unwrap(), None);
        assert_eq!(proj.basemap(&caps, BasemapResolution::Low).unwrap(), None);
        assert_eq!(proj.cartopy(&caps).unwrap(), None);
        assert_eq!(proj.ngl(&caps).unwrap(), None);
    }

    #[test]
    fn test_unknown_extent_needs_no_capability() {
        let proj = WrfProjection::Unknown(base(&[]));
        let extent = proj.cartopy_extent(&Capabilities::none()).unwrap();
        assert_eq!(extent.x_limits, [-100.0, -80.0]);
        assert_eq!(extent.y_limits, [10.0, 20.0]);
    }

    #[test]
    fn test_projected_extent_needs_cartopy() {
        let proj = WrfProjection::Mercator(Mercator::new(base(&[("STAND_LON", -90.0)])));
        let err = proj
            .cartopy_xlim(&Capabilities::all().without(Capability::Cartopy))
            .unwrap_err();
        assert_eq!(err, ProjectionError::CapabilityUnavailable(Capability::Cartopy));

        let xlim = proj.cartopy_xlim(&Capabilities::all()).unwrap();
        assert!(xlim[0] < 0.0 && xlim[1] > 0.0);
    }

    #[test]
    fn test_null_projection() {
        let null = WrfProjection::Null;
        let caps = Capabilities::all();

        assert!(null.base().is_none());
        assert_eq!(null.proj4(&caps).unwrap(), None);
        assert_eq!(
            null.cartopy_extent(&caps).unwrap_err(),
            ProjectionError::Undefined("extent")
        );
        assert_eq!(null.to_string(), "NullProjection()");
    }

    #[test]
    fn test_reconcile() {
        let a = WrfProjection::LatLon(LatLon::new(base(&[("STAND_LON", 0.0)])));
        let b = WrfProjection::Mercator(Mercator::new(base(&[("STAND_LON", 0.0)])));

        assert_eq!(WrfProjection::reconcile(&[a.clone(), a.clone()]), a);
        assert!(WrfProjection::reconcile(&[a.clone(), b]).is_null());
        assert!(WrfProjection::reconcile(&[]).is_null());
    }

    #[test]
    fn test_display() {
        let proj = WrfProjection::Unknown(base(&[("STAND_LON", -90.0)]));
        assert_eq!(
            proj.to_string(),
            "WrfProj(bottom_left=(10.0, -100.0), top_right=(20.0, -80.0), stand_lon=-90.0, \
             moad_cen_lat=None, truelat1=None, truelat2=None, pole_lat=None, pole_lon=None)"
        );
    }

    #[test]
    fn test_projection_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WrfProjection>();
        assert_send_sync::<Capabilities>();
    }
}
