//! Result types shared by the three computation paths

use serde::Serialize;
use std::fmt;

/// Which computation path produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CalcKind {
    Arithmetic,
    Scientific,
    Conversion,
}

/// A successful computation, ready for display and for the history log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Calculation {
    pub(crate) kind: CalcKind,
    /// What the user asked for, before any constant substitution
    pub(crate) input: String,
    pub(crate) value: f64,
    /// Target unit for conversions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) unit: Option<String>,
    /// Message shown to the user
    pub(crate) message: String,
    /// String appended to the history log
    pub(crate) entry: String,
}

/// A magnitude paired with a unit of measure
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Quantity {
    pub(crate) magnitude: f64,
    pub(crate) unit: String,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{}", format_value(self.magnitude))
        } else {
            write!(f, "{} {}", format_value(self.magnitude), self.unit)
        }
    }
}

/// Render a number the way every message and history entry shows it.
///
/// Shortest representation that round-trips, with `-0` folded into `0`.
pub(crate) fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_value_integers_have_no_fraction() {
        assert_eq!(format_value(3.0), "3");
        assert_eq!(format_value(-12.0), "-12");
        assert_eq!(format_value(299_792_458.0), "299792458");
    }

    #[test]
    fn format_value_keeps_full_precision() {
        assert_eq!(format_value(std::f64::consts::PI), "3.141592653589793");
        assert_eq!(format_value(0.5), "0.5");
    }

    #[test]
    fn format_value_negative_zero() {
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn format_value_non_finite() {
        assert_eq!(format_value(f64::INFINITY), "inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn quantity_display() {
        let q = Quantity {
            magnitude: 3.28,
            unit: "feet".to_string(),
        };
        assert_eq!(q.to_string(), "3.28 feet");

        let bare = Quantity {
            magnitude: 2.0,
            unit: String::new(),
        };
        assert_eq!(bare.to_string(), "2");
    }

    #[test]
    fn calculation_json_skips_missing_unit() {
        let calc = Calculation {
            kind: CalcKind::Arithmetic,
            input: "1 + 2".to_string(),
            value: 3.0,
            unit: None,
            message: "1 + 2 = 3".to_string(),
            entry: "1 + 2 = 3".to_string(),
        };
        let json = serde_json::to_value(&calc).unwrap();
        assert_eq!(json["kind"].as_str(), Some("arithmetic"));
        assert!(json.get("unit").is_none());
    }
}
