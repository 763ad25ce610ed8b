//! One user session: constants, collaborators and the history they feed

use chrono::{DateTime, Utc};
use tracing::debug;

use super::arithmetic::{self, Operator};
use super::constants::ConstantTable;
use super::expression::{Evaluator, evaluate_formula};
use super::history::History;
use super::types::{CalcKind, Calculation, format_value};
use super::units::{self, UnitRegistry};
use crate::consts::SCIENTIFIC_TAG;
use crate::error::CalcError;
use crate::utils::Timezone;

/// Owns the history log for as long as the session lives.
///
/// Each operation runs one computation; only successes are appended.
pub(crate) struct Session {
    constants: ConstantTable,
    history: History,
    timezone: Timezone,
    evaluator: Box<dyn Evaluator>,
    registry: Box<dyn UnitRegistry>,
}

impl Session {
    pub(crate) fn new(
        constants: ConstantTable,
        timezone: Timezone,
        evaluator: Box<dyn Evaluator>,
        registry: Box<dyn UnitRegistry>,
    ) -> Self {
        Self {
            constants,
            history: History::new(),
            timezone,
            evaluator,
            registry,
        }
    }

    pub(crate) fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    pub(crate) fn history(&self) -> &History {
        &self.history
    }

    fn record(&mut self, result: Result<Calculation, CalcError>) -> Result<Calculation, CalcError> {
        match &result {
            Ok(calc) => self.history.append(calc.entry.clone()),
            Err(e) => debug!(kind = e.kind(), error = %e, "computation failed"),
        }
        result
    }

    pub(crate) fn arithmetic(
        &mut self,
        op: Operator,
        a: f64,
        b: f64,
    ) -> Result<Calculation, CalcError> {
        debug!(op = op.name(), a, b, "arithmetic");
        let result = arithmetic::apply(op, a, b);
        self.record(result)
    }

    pub(crate) fn evaluate(&mut self, formula: &str) -> Result<Calculation, CalcError> {
        self.evaluate_at(formula, Utc::now())
    }

    /// Evaluate `formula` and stamp the history entry with `now`
    pub(crate) fn evaluate_at(
        &mut self,
        formula: &str,
        now: DateTime<Utc>,
    ) -> Result<Calculation, CalcError> {
        let result = evaluate_formula(formula, &self.constants, self.evaluator.as_ref()).map(
            |(value, _)| {
                let shown = format_value(value);
                Calculation {
                    kind: CalcKind::Scientific,
                    input: formula.to_string(),
                    value,
                    unit: None,
                    message: format!("Result: {shown}"),
                    entry: format!(
                        "[{}] {SCIENTIFIC_TAG} {formula} = {shown}",
                        self.timezone.clock_time(now)
                    ),
                }
            },
        );
        self.record(result)
    }

    pub(crate) fn convert(
        &mut self,
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<Calculation, CalcError> {
        let result = units::convert(value, from, to, self.registry.as_ref()).map(|quantity| {
            let input = format!("{} {}", format_value(value), from.trim());
            let line = format!("{input} = {quantity}");
            Calculation {
                kind: CalcKind::Conversion,
                input,
                value: quantity.magnitude,
                unit: Some(quantity.unit),
                message: line.clone(),
                entry: line,
            }
        });
        self.record(result)
    }
}
