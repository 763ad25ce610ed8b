//! fend-core as expression evaluator and unit registry

use super::expression::Evaluator;
use super::types::format_value;
use super::units::UnitRegistry;

/// fend rounds inexact results to 10 decimal places unless asked otherwise;
/// 17 significant digits round-trip any `f64`.
const FULL_PRECISION: &str = "to 17 sf";

/// Stateless adapter; every call gets a fresh fend context so no variables
/// leak from one evaluation into the next.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FendBackend;

impl FendBackend {
    fn run(input: &str) -> Result<String, String> {
        let mut context = fend_core::Context::new();
        let result = fend_core::evaluate(input, &mut context)?;
        let main = result.get_main_result().trim();
        if main.is_empty() {
            return Err("expected an expression".to_string());
        }
        Ok(main.to_string())
    }
}

impl Evaluator for FendBackend {
    fn evaluate(&self, text: &str) -> Result<String, String> {
        Self::run(&format!("({text}) {FULL_PRECISION}"))
    }
}

impl UnitRegistry for FendBackend {
    fn quantity(&self, value: f64, unit: &str) -> Result<String, String> {
        Self::run(&format!("{} {unit}", format_value(value)))
    }

    fn convert(&self, value: f64, from: &str, to: &str) -> Result<String, String> {
        Self::run(&format!(
            "({} {from}) to {to} {FULL_PRECISION}",
            format_value(value)
        ))
    }
}
