//! Free-text formula evaluation

use tracing::debug;

use super::constants::ConstantTable;
use crate::error::CalcError;

/// Text-in, number-out evaluation backend
pub(crate) trait Evaluator {
    /// Evaluate `text` and return the backend's rendering of the result,
    /// or its own description of what went wrong.
    fn evaluate(&self, text: &str) -> Result<String, String>;
}

/// Substitute constants, normalise the exponent operator and evaluate.
///
/// Returns the numeric result together with the text actually handed to the
/// backend.
pub(crate) fn evaluate_formula(
    formula: &str,
    constants: &ConstantTable,
    evaluator: &dyn Evaluator,
) -> Result<(f64, String), CalcError> {
    if formula.trim().is_empty() {
        return Err(CalcError::Expression("empty expression".to_string()));
    }

    let substituted = constants.substitute(formula).replace("**", "^");
    debug!(formula, substituted = %substituted, "evaluating expression");

    let output = evaluator
        .evaluate(&substituted)
        .map_err(CalcError::Expression)?;
    debug!(output = %output, "evaluator output");

    let value = parse_real(&output).ok_or_else(|| {
        CalcError::Expression(format!("result is not a real number: {output}"))
    })?;
    Ok((value, substituted))
}

/// Strip the `approx.` marker some backends put in front of inexact results
pub(crate) fn strip_approx(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("approx.")
        .map(str::trim_start)
        .unwrap_or(trimmed)
}

/// Parse a backend result that should be a plain finite real number
pub(crate) fn parse_real(output: &str) -> Option<f64> {
    let value: f64 = strip_approx(output).parse().ok()?;
    value.is_finite().then_some(value)
}
