//! CF-convention grid mapping attributes.

use super::{AttrMap, AttrValue};
use serde::{Deserialize, Serialize};

/// Grid mapping attributes for a CF `grid_mapping` variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CfAttributes {
    attrs: AttrMap,
}

impl CfAttributes {
    /// Start a mapping with its `grid_mapping_name`.
    pub fn new(grid_mapping_name: &str) -> Self {
        let mut attrs = AttrMap::new();
        attrs.insert("grid_mapping_name".to_string(), grid_mapping_name.into());
        Self { attrs }
    }

    pub fn with(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    pub fn grid_mapping_name(&self) -> Option<&str> {
        self.get("grid_mapping_name").and_then(AttrValue::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// Numeric attribute, `None` when absent, missing or not a scalar.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AttrValue::as_f64)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_accessors() {
        let cf = CfAttributes::new("mercator")
            .with("standard_parallel", 10.0)
            .with("false_easting", None::<f64>);

        assert_eq!(cf.grid_mapping_name(), Some("mercator"));
        assert_eq!(cf.get_f64("standard_parallel"), Some(10.0));
        assert!(cf.get("false_easting").unwrap().is_missing());
        assert_eq!(cf.len(), 3);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let cf = CfAttributes::new("lambert_conformal_conic")
            .with("standard_parallel", vec![30.0, 60.0])
            .with("grid_north_pole_longitude", None::<f64>);
        let json = serde_json::to_value(&cf).unwrap();

        assert_eq!(json["grid_mapping_name"], "lambert_conformal_conic");
        assert_eq!(json["standard_parallel"], serde_json::json!([30.0, 60.0]));
        assert!(json["grid_north_pole_longitude"].is_null());
    }
}
