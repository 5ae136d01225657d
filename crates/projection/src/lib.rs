//! WRF map projection translation.
//!
//! Reads the projection attributes WRF writes to its output files and
//! describes the same projection for several consumers: a PROJ descriptor,
//! CF grid mapping attributes, and Basemap, Cartopy and NGL parameter sets.
//! Each consumer is gated by a [`Capability`].
//!
//! ```ignore
//! use wrf_common::{CoordPair, CornerInput};
//! use wrf_projection::{get_projection, Capabilities};
//!
//! let corners = CornerInput::corners(CoordPair::new(21.1, -122.7), CoordPair::new(47.8, -60.9));
//! let proj = get_projection(&corners, [("MAP_PROJ", 1.0), ("TRUELAT1", 30.0)])?;
//! let descriptor = proj.proj4(&Capabilities::from_env())?;
//! ```

pub mod capability;
pub mod crs;
pub mod error;
pub mod factory;
pub mod formats;
pub mod params;
pub mod variant;

pub use capability::{Capabilities, Capability, CapabilityProvider};
pub use crs::{CartopyCrs, ForwardProjection, Globe, PlaneTransform};
pub use error::{ProjectionError, ProjectionResult};
pub use factory::{get_projection, projection_from_params};
pub use formats::{
    AttrMap, AttrValue, BasemapParams, BasemapProjection, BasemapResolution, CfAttributes,
    NglProjection, NglResources,
};
pub use params::{is_missing, keys_to_upper, ProjectionParameters, ProjectionType, WRF_EARTH_RADIUS};
pub use variant::{
    Hemisphere, LambertConformal, LatLon, Mercator, PolarStereographic, RotatedLatLon, WrfProj,
    WrfProjection,
};
