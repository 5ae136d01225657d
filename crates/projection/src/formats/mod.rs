//! Output representations.
//!
//! Each consumer describes the same physical projection with its own keys,
//! signs and hemisphere rules. The variants fill these types; nothing here
//! knows about WRF attributes.

pub mod basemap;
pub mod cf;
pub mod ngl;
pub mod proj4;

pub use basemap::{BasemapParams, BasemapProjection, BasemapResolution};
pub use cf::CfAttributes;
pub use ngl::{NglProjection, NglResources};
pub use proj4::Proj4Builder;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single attribute or keyword value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Float(f64),
    FloatList(Vec<f64>),
    Text(String),
    /// The source value was absent; serialized as `null`.
    Missing,
}

impl AttrValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[f64]> {
        match self {
            AttrValue::FloatList(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, AttrValue::Missing)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<Option<f64>> for AttrValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(AttrValue::Missing, AttrValue::Float)
    }
}

impl From<Vec<f64>> for AttrValue {
    fn from(v: Vec<f64>) -> Self {
        AttrValue::FloatList(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

/// Ordered key/value mapping for a consumer format.
pub type AttrMap = BTreeMap<String, AttrValue>;
