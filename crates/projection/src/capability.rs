//! Output-format capabilities.
//!
//! Each output representation targets a consumer that may or may not be
//! present in the running environment. The core asks a [`CapabilityProvider`]
//! before building a representation and fails with
//! [`ProjectionError::CapabilityUnavailable`](crate::ProjectionError) when the
//! consumer is disabled.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An output format the projection layer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// PROJ-style `+key=value` descriptor strings
    Proj4,
    /// CF-convention grid mapping attributes
    Cf,
    /// Basemap keyword parameters
    Basemap,
    /// Cartopy CRS descriptions, also used for projected extents
    Cartopy,
    /// NGL map resources
    Ngl,
}

impl Capability {
    pub const ALL: [Capability; 5] = [
        Capability::Proj4,
        Capability::Cf,
        Capability::Basemap,
        Capability::Cartopy,
        Capability::Ngl,
    ];

    /// Environment variable controlling this capability in [`Capabilities::from_env`].
    pub fn env_var(&self) -> &'static str {
        match self {
            Capability::Proj4 => "WRF_PROJECTION_ENABLE_PROJ4",
            Capability::Cf => "WRF_PROJECTION_ENABLE_CF",
            Capability::Basemap => "WRF_PROJECTION_ENABLE_BASEMAP",
            Capability::Cartopy => "WRF_PROJECTION_ENABLE_CARTOPY",
            Capability::Ngl => "WRF_PROJECTION_ENABLE_NGL",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Proj4 => "proj4",
            Capability::Cf => "cf",
            Capability::Basemap => "basemap",
            Capability::Cartopy => "cartopy",
            Capability::Ngl => "ngl",
        };
        write!(f, "{}", name)
    }
}

/// Answers whether an output format is available.
pub trait CapabilityProvider {
    fn is_enabled(&self, capability: Capability) -> bool;
}

impl<F> CapabilityProvider for F
where
    F: Fn(Capability) -> bool,
{
    fn is_enabled(&self, capability: Capability) -> bool {
        self(capability)
    }
}

/// Capability configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub proj4: bool,
    pub cf: bool,
    pub basemap: bool,
    pub cartopy: bool,
    pub ngl: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

impl Capabilities {
    /// Every format enabled.
    pub fn all() -> Self {
        Self {
            proj4: true,
            cf: true,
            basemap: true,
            cartopy: true,
            ngl: true,
        }
    }

    /// Every format disabled.
    pub fn none() -> Self {
        Self {
            proj4: false,
            cf: false,
            basemap: false,
            cartopy: false,
            ngl: false,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Each capability defaults to enabled; setting its variable to `false`,
    /// `0`, `no` or `off` disables it.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        for capability in Capability::ALL {
            if let Ok(val) = std::env::var(capability.env_var()) {
                config.set(capability, parse_flag(&val));
            }
        }

        config
    }

    pub fn enable(&mut self, capability: Capability) {
        self.set(capability, true);
    }

    pub fn disable(&mut self, capability: Capability) {
        self.set(capability, false);
    }

    /// Builder-style variant of [`Capabilities::disable`].
    pub fn without(mut self, capability: Capability) -> Self {
        self.disable(capability);
        self
    }

    fn set(&mut self, capability: Capability, enabled: bool) {
        let flag = match capability {
            Capability::Proj4 => &mut self.proj4,
            Capability::Cf => &mut self.cf,
            Capability::Basemap => &mut self.basemap,
            Capability::Cartopy => &mut self.cartopy,
            Capability::Ngl => &mut self.ngl,
        };
        *flag = enabled;
    }
}

impl CapabilityProvider for Capabilities {
    fn is_enabled(&self, capability: Capability) -> bool {
        match capability {
            Capability::Proj4 => self.proj4,
            Capability::Cf => self.cf,
            Capability::Basemap => self.basemap,
            Capability::Cartopy => self.cartopy,
            Capability::Ngl => self.ngl,
        }
    }
}

fn parse_flag(val: &str) -> bool {
    !matches!(
        val.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
