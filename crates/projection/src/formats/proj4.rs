//! PROJ-style descriptor strings.
//!
//! Descriptors are space-separated `+key=value` tokens. Floats are written with
//! a decimal point (`30.0`, `6370000.0`) since downstream tools parse them.

/// Render a float the way descriptors expect it.
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

/// Incremental builder for a descriptor string.
#[derive(Debug, Clone)]
pub struct Proj4Builder {
    tokens: Vec<String>,
}

impl Proj4Builder {
    /// Start a descriptor with `+proj=<name>`.
    pub fn new(proj: &str) -> Self {
        Self {
            tokens: vec![format!("+proj={}", proj)],
        }
    }

    /// Add a textual parameter.
    pub fn text(mut self, key: &str, value: &str) -> Self {
        self.tokens.push(format!("+{}={}", key, value));
        self
    }

    /// Add a numeric parameter.
    pub fn value(mut self, key: &str, value: f64) -> Self {
        self.tokens.push(format!("+{}={}", key, format_float(value)));
        self
    }

    /// Add a numeric parameter, or nothing when it is absent.
    pub fn opt_value(self, key: &str, value: Option<f64>) -> Self {
        match value {
            Some(v) => self.value(key, v),
            None => self,
        }
    }

    /// Add `+a` and `+b` for a sphere of the given radius.
    pub fn sphere(self, radius: f64) -> Self {
        self.value("a", radius).value("b", radius)
    }

    pub fn build(self) -> String {
        self.tokens.join(" ")
    }
}

/// Parse a descriptor back into `(key, value)` pairs.
///
/// Tokens without `=` yield an empty value.
pub fn parse(descriptor: &str) -> Vec<(&str, &str)> {
    descriptor
        .split_whitespace()
        .filter_map(|token| token.strip_prefix('+'))
        .map(|token| token.split_once('=').unwrap_or((token, "")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_float_keeps_decimal_point() {
        assert_eq!(format_float(30.0), "30.0");
        assert_eq!(format_float(-98.5), "-98.5");
        assert_eq!(format_float(6_370_000.0), "6370000.0");
        assert_eq!(format_float(1.0f64.to_radians()), "0.017453292519943295");
    }

    #[test]
    fn test_builder() {
        let descriptor = Proj4Builder::new("merc")
            .text("units", "meters")
            .sphere(6_370_000.0)
            .value("lon_0", -98.0)
            .opt_value("lat_ts", None)
            .build();
        assert_eq!(
            descriptor,
            "+proj=merc +units=meters +a=6370000.0 +b=6370000.0 +lon_0=-98.0"
        );
    }

    #[test]
    fn test_parse() {
        let pairs = parse("+proj=lcc +lat_1=30.0 +no_defs");
        assert_eq!(pairs, vec![("proj", "lcc"), ("lat_1", "30.0"), ("no_defs", "")]);
    }
}
