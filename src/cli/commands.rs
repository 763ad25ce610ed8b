//! CLI subcommand definitions
//!
//! One-shot subcommands and the line commands understood by the interactive session.

use clap::Subcommand;

use crate::core::Operator;
use crate::error::AppError;

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Apply one arithmetic operation: add, sub, mul, div, mod, pow or sqrt
    Calc {
        /// Operator name or symbol
        op: String,
        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: f64,
        /// Second operand (not needed for sqrt)
        #[arg(allow_negative_numbers = true)]
        b: Option<f64>,
    },
    /// Evaluate a formula; named constants such as π are substituted first
    Eval {
        /// Formula words, joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        formula: Vec<String>,
    },
    /// Convert a value between units
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Source unit (e.g. meter, kg, second)
        from: String,
        /// Target unit (e.g. feet, lb, minute)
        to: String,
    },
    /// List the named constants
    Constants,
    /// Start an interactive session (default)
    Repl,
}

/// A fully parsed arithmetic request
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CalcRequest {
    pub(crate) op: Operator,
    pub(crate) a: f64,
    pub(crate) b: f64,
}

impl CalcRequest {
    pub(crate) fn new(op: &str, a: f64, b: Option<f64>) -> Result<Self, AppError> {
        let op = Operator::parse(op).ok_or_else(|| AppError::UnknownOperator {
            input: op.to_string(),
        })?;
        let b = match (op.is_unary(), b) {
            (true, b) => b.unwrap_or(0.0),
            (false, Some(b)) => b,
            (false, None) => return Err(AppError::MissingOperand { op: op.name() }),
        };
        if let Some(bad) = [a, b].into_iter().find(|x| !x.is_finite()) {
            return Err(AppError::InvalidNumber {
                input: bad.to_string(),
            });
        }
        Ok(Self { op, a, b })
    }
}

/// One line typed into the interactive session
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ReplCommand {
    Calc(CalcRequest),
    Eval(String),
    Convert { value: f64, from: String, to: String },
    History(Option<usize>),
    Constants,
    Help,
    Quit,
    Empty,
}

pub(crate) const REPL_HELP: &str = "\
Commands:
  calc <op> <a> [b]            add, sub, mul, div, mod, pow, sqrt
  eval <formula>               e.g. eval 2 * π * 5
  convert <v> <from> to <to>   e.g. convert 1 meter to feet
  history [n]                  most recent entries first
  constants                    list named constants
  help                         show this text
  quit                         leave the session
Anything else is evaluated as a formula.";

const CALC_USAGE: &str = "calc <op> <a> [b]";
const CONVERT_USAGE: &str = "convert <value> <from> to <to>";
const HISTORY_USAGE: &str = "history [n]";

fn parse_number(raw: &str) -> Result<f64, AppError> {
    raw.parse::<f64>().map_err(|_| AppError::InvalidNumber {
        input: raw.to_string(),
    })
}

impl ReplCommand {
    pub(crate) fn parse(line: &str) -> Result<Self, AppError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(ReplCommand::Empty);
        }
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head.to_lowercase().as_str() {
            "quit" | "exit" | "q" if rest.is_empty() => Ok(ReplCommand::Quit),
            "help" | "?" if rest.is_empty() => Ok(ReplCommand::Help),
            "constants" if rest.is_empty() => Ok(ReplCommand::Constants),
            "history" => {
                if rest.is_empty() {
                    return Ok(ReplCommand::History(None));
                }
                rest.parse::<usize>()
                    .map(|n| ReplCommand::History(Some(n)))
                    .map_err(|_| AppError::Usage(HISTORY_USAGE))
            }
            "calc" => {
                let words: Vec<&str> = rest.split_whitespace().collect();
                let (op, a, b) = match words.as_slice() {
                    [op, a] => (*op, parse_number(a)?, None),
                    [op, a, b] => (*op, parse_number(a)?, Some(parse_number(b)?)),
                    _ => return Err(AppError::Usage(CALC_USAGE)),
                };
                Ok(ReplCommand::Calc(CalcRequest::new(op, a, b)?))
            }
            "eval" => {
                if rest.is_empty() {
                    return Err(AppError::Usage("eval <formula>"));
                }
                Ok(ReplCommand::Eval(rest.to_string()))
            }
            "convert" => Self::parse_convert(rest),
            _ => Ok(ReplCommand::Eval(line.to_string())),
        }
    }

    /// `<value> <from> to <to>`, where both units may span several words,
    /// or the three-word form `<value> <from> <to>`.
    fn parse_convert(rest: &str) -> Result<Self, AppError> {
        let (value, units) = rest
            .split_once(char::is_whitespace)
            .ok_or(AppError::Usage(CONVERT_USAGE))?;
        let value = parse_number(value)?;
        let units = units.trim();

        let (from, to) = match units.split_once(" to ") {
            Some((from, to)) => (from.trim(), to.trim()),
            None => {
                let words: Vec<&str> = units.split_whitespace().collect();
                match words.as_slice() {
                    [from, to] => (*from, *to),
                    _ => return Err(AppError::Usage(CONVERT_USAGE)),
                }
            }
        };
        if from.is_empty() || to.is_empty() {
            return Err(AppError::Usage(CONVERT_USAGE));
        }
        Ok(ReplCommand::Convert {
            value,
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_request_requires_second_operand_for_binary_ops() {
        assert!(matches!(
            CalcRequest::new("div", 1.0, None),
            Err(AppError::MissingOperand { op: "div" })
        ));
        let sqrt = CalcRequest::new("sqrt", 9.0, None).unwrap();
        assert_eq!(sqrt.op, Operator::Sqrt);
    }

    #[test]
    fn calc_request_rejects_non_finite_operands() {
        for (a, b) in [(f64::NAN, Some(1.0)), (1.0, Some(f64::INFINITY)), (f64::NEG_INFINITY, None)] {
            let op = if b.is_some() { "add" } else { "sqrt" };
            assert!(matches!(
                CalcRequest::new(op, a, b),
                Err(AppError::InvalidNumber { .. })
            ));
        }
        assert!(matches!(
            ReplCommand::parse("calc add nan 1"),
            Err(AppError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn calc_request_unknown_operator() {
        assert!(matches!(
            CalcRequest::new("log", 1.0, Some(2.0)),
            Err(AppError::UnknownOperator { .. })
        ));
    }

    #[test]
    fn parse_calc_line() {
        assert_eq!(
            ReplCommand::parse("calc add 1 -2").unwrap(),
            ReplCommand::Calc(CalcRequest {
                op: Operator::Add,
                a: 1.0,
                b: -2.0
            })
        );
        assert!(matches!(
            ReplCommand::parse("calc add one 2"),
            Err(AppError::InvalidNumber { .. })
        ));
        assert!(matches!(
            ReplCommand::parse("calc"),
            Err(AppError::Usage(_))
        ));
    }

    #[test]
    fn parse_eval_line_keeps_spacing_inside_formula() {
        assert_eq!(
            ReplCommand::parse("eval g (gravity) * 2").unwrap(),
            ReplCommand::Eval("g (gravity) * 2".to_string())
        );
    }

    #[test]
    fn bare_formula_is_evaluated() {
        assert_eq!(
            ReplCommand::parse("2 * π * 5").unwrap(),
            ReplCommand::Eval("2 * π * 5".to_string())
        );
    }

    #[test]
    fn parse_convert_with_to() {
        assert_eq!(
            ReplCommand::parse("convert 60 miles per hour to km/h").unwrap(),
            ReplCommand::Convert {
                value: 60.0,
                from: "miles per hour".to_string(),
                to: "km/h".to_string()
            }
        );
    }

    #[test]
    fn parse_convert_three_words() {
        assert_eq!(
            ReplCommand::parse("convert 1 meter feet").unwrap(),
            ReplCommand::Convert {
                value: 1.0,
                from: "meter".to_string(),
                to: "feet".to_string()
            }
        );
        assert!(ReplCommand::parse("convert 1 meter").is_err());
        assert!(ReplCommand::parse("convert x meter feet").is_err());
    }

    #[test]
    fn parse_history_and_keywords() {
        assert_eq!(ReplCommand::parse("history").unwrap(), ReplCommand::History(None));
        assert_eq!(
            ReplCommand::parse("history 5").unwrap(),
            ReplCommand::History(Some(5))
        );
        assert!(ReplCommand::parse("history five").is_err());
        assert_eq!(ReplCommand::parse("QUIT").unwrap(), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("help").unwrap(), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("constants").unwrap(), ReplCommand::Constants);
        assert_eq!(ReplCommand::parse("   ").unwrap(), ReplCommand::Empty);
    }

    #[test]
    fn single_letter_e_is_a_formula() {
        assert_eq!(
            ReplCommand::parse("e").unwrap(),
            ReplCommand::Eval("e".to_string())
        );
    }
}
