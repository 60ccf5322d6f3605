use std::fmt;

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate as returned by the HERE APIs. No range validation is
/// performed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Shortest decimal form of `value`, never in exponent notation and always
/// with a fractional part (`1.0`, `6.5`, `0.000005`).
pub fn format_query_float(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Writes `LAT,LON` the way the HERE query parameters expect it.
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{},{}",
            format_query_float(self.latitude),
            format_query_float(self.longitude)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_fractional_part() {
        assert_eq!(GeoPoint::new(1.0, 2.0).to_string(), "1.0,2.0");
        assert_eq!(GeoPoint::new(48.8717, -2.3).to_string(), "48.8717,-2.3");
    }

    #[test]
    fn small_and_large_values_skip_exponent() {
        assert_eq!(format_query_float(0.000005), "0.000005");
        assert_eq!(format_query_float(-1e-7), "-0.0000001");
        assert_eq!(format_query_float(1e16), "10000000000000000.0");
        assert_eq!(
            GeoPoint::new(0.000005, 1e-6).to_string(),
            "0.000005,0.000001"
        );
    }
}
