//! Unit conversion on top of a unit registry

use tracing::debug;

use super::expression::strip_approx;
use super::types::{Quantity, format_value};
use crate::error::CalcError;

/// Unit parsing and dimensional conversion backend
pub(crate) trait UnitRegistry {
    /// Build the quantity `value unit`; fails for unknown units
    fn quantity(&self, value: f64, unit: &str) -> Result<String, String>;

    /// Convert `value from` into `to`; fails for unknown or incompatible units
    fn convert(&self, value: f64, from: &str, to: &str) -> Result<String, String>;
}

pub(crate) fn convert(
    value: f64,
    from: &str,
    to: &str,
    registry: &dyn UnitRegistry,
) -> Result<Quantity, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::Conversion(format!(
            "value must be a finite number, got {}",
            format_value(value)
        )));
    }
    let from = from.trim();
    let to = to.trim();
    if from.is_empty() || to.is_empty() {
        return Err(CalcError::Conversion("unit must not be empty".to_string()));
    }

    let source = registry
        .quantity(value, from)
        .map_err(CalcError::Conversion)?;
    debug!(source = %source, "parsed source quantity");

    let output = registry
        .convert(value, from, to)
        .map_err(CalcError::Conversion)?;
    debug!(output = %output, "conversion output");

    parse_quantity(&output).ok_or_else(|| {
        CalcError::Conversion(format!("could not read converted value: {output}"))
    })
}

/// Split `"approx. 3.28 feet"` into magnitude and unit
pub(crate) fn parse_quantity(output: &str) -> Option<Quantity> {
    let text = strip_approx(output);
    let (number, unit) = match text.split_once(char::is_whitespace) {
        Some((number, unit)) => (number, unit.trim()),
        None => (text, ""),
    };
    let magnitude: f64 = number.parse().ok()?;
    magnitude.is_finite().then(|| Quantity {
        magnitude,
        unit: unit.to_string(),
    })
}
