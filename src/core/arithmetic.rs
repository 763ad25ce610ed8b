//! Basic arithmetic on two operands

use serde::Serialize;

use super::types::{CalcKind, Calculation, format_value};
use crate::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Power,
    /// Square root of the first operand; the second is ignored
    Sqrt,
}

impl Operator {
    #[cfg(test)]
    pub(crate) const ALL: [Operator; 7] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Modulus,
        Operator::Power,
        Operator::Sqrt,
    ];

    /// Look up an operator by word or symbol, case-insensitively
    pub(crate) fn parse(input: &str) -> Option<Operator> {
        let op = match input.trim().to_lowercase().as_str() {
            "add" | "plus" | "+" => Operator::Add,
            "sub" | "subtract" | "minus" | "-" => Operator::Subtract,
            "mul" | "multiply" | "times" | "*" | "x" | "×" => Operator::Multiply,
            "div" | "divide" | "/" | "÷" => Operator::Divide,
            "mod" | "modulus" | "rem" | "%" => Operator::Modulus,
            "pow" | "power" | "^" | "**" => Operator::Power,
            "sqrt" | "root" | "√" => Operator::Sqrt,
            _ => return None,
        };
        Some(op)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "sub",
            Operator::Multiply => "mul",
            Operator::Divide => "div",
            Operator::Modulus => "mod",
            Operator::Power => "pow",
            Operator::Sqrt => "sqrt",
        }
    }

    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Modulus => "%",
            Operator::Power => "^",
            Operator::Sqrt => "√",
        }
    }

    pub(crate) fn is_unary(self) -> bool {
        matches!(self, Operator::Sqrt)
    }
}

/// Apply `op` to `a` and `b`.
///
/// The returned message doubles as the history entry: `"<a> <symbol> <b> = <result>"`,
/// or `"√<a> = <result>"` for square roots.
pub(crate) fn apply(op: Operator, a: f64, b: f64) -> Result<Calculation, CalcError> {
    let value = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
        Operator::Modulus => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a % b
        }
        Operator::Power => {
            let value = a.powf(b);
            if value.is_nan() && !a.is_nan() && !b.is_nan() {
                return Err(CalcError::Domain(format!(
                    "{} ^ {} has no real value",
                    format_value(a),
                    format_value(b)
                )));
            }
            value
        }
        Operator::Sqrt => {
            if a < 0.0 {
                return Err(CalcError::Domain(
                    "Cannot take square root of negative number!".to_string(),
                ));
            }
            a.sqrt()
        }
    };

    let input = if op.is_unary() {
        format!("{}{}", op.symbol(), format_value(a))
    } else {
        format!("{} {} {}", format_value(a), op.symbol(), format_value(b))
    };
    let message = format!("{input} = {}", format_value(value));

    Ok(Calculation {
        kind: CalcKind::Arithmetic,
        input,
        value,
        unit: None,
        entry: message.clone(),
        message,
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_and_symbols() {
        assert_eq!(Operator::parse("add"), Some(Operator::Add));
        assert_eq!(Operator::parse("ADD"), Some(Operator::Add));
        assert_eq!(Operator::parse("+"), Some(Operator::Add));
        assert_eq!(Operator::parse("×"), Some(Operator::Multiply));
        assert_eq!(Operator::parse("x"), Some(Operator::Multiply));
        assert_eq!(Operator::parse("÷"), Some(Operator::Divide));
        assert_eq!(Operator::parse("**"), Some(Operator::Power));
        assert_eq!(Operator::parse(" sqrt "), Some(Operator::Sqrt));
        assert_eq!(Operator::parse("log"), None);
    }

    #[test]
    fn every_operator_round_trips_through_its_name() {
        for op in Operator::ALL {
            assert_eq!(Operator::parse(op.name()), Some(op));
        }
    }

    #[test]
    fn basic_operations() {
        assert_eq!(apply(Operator::Add, 1.5, 2.0).unwrap().value, 3.5);
        assert_eq!(apply(Operator::Subtract, 1.0, 4.0).unwrap().value, -3.0);
        assert_eq!(apply(Operator::Multiply, 3.0, 4.0).unwrap().value, 12.0);
        assert_eq!(apply(Operator::Divide, 7.0, 2.0).unwrap().value, 3.5);
        assert_eq!(apply(Operator::Power, 2.0, 10.0).unwrap().value, 1024.0);
    }

    #[test]
    fn divide_matches_native_division() {
        for (a, b) in [(1.0, 3.0), (-7.5, 0.25), (1e300, 1e-10), (0.1, 0.2)] {
            assert_eq!(apply(Operator::Divide, a, b).unwrap().value, a / b);
        }
    }

    #[test]
    fn divide_by_zero_fails() {
        assert_eq!(
            apply(Operator::Divide, 5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            apply(Operator::Divide, 5.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn modulus_is_truncated_remainder() {
        assert_eq!(apply(Operator::Modulus, 7.0, 3.0).unwrap().value, 1.0);
        assert_eq!(apply(Operator::Modulus, -7.0, 3.0).unwrap().value, -1.0);
        assert_eq!(apply(Operator::Modulus, 5.5, 2.0).unwrap().value, 1.5);
        assert_eq!(
            apply(Operator::Modulus, 1.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn power_with_fractional_and_negative_exponents() {
        assert!((apply(Operator::Power, 16.0, 0.5).unwrap().value - 4.0).abs() < 1e-12);
        assert_eq!(apply(Operator::Power, 2.0, -1.0).unwrap().value, 0.5);
        assert!(apply(Operator::Power, 0.0, -1.0).unwrap().value.is_infinite());
        assert!(matches!(
            apply(Operator::Power, -8.0, 1.0 / 3.0),
            Err(CalcError::Domain(_))
        ));
    }

    #[test]
    fn sqrt_squares_back() {
        for a in [0.0, 1.0, 2.0, 10.5, 1e10] {
            let root = apply(Operator::Sqrt, a, 0.0).unwrap().value;
            assert!(root >= 0.0);
            assert!((root * root - a).abs() <= 1e-9 * a.max(1.0));
        }
    }

    #[test]
    fn sqrt_of_negative_is_domain_error() {
        let err = apply(Operator::Sqrt, -4.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            CalcError::Domain("Cannot take square root of negative number!".to_string())
        );
    }

    #[test]
    fn messages_use_display_symbols() {
        assert_eq!(apply(Operator::Add, 1.0, 2.0).unwrap().message, "1 + 2 = 3");
        assert_eq!(
            apply(Operator::Multiply, 2.5, 4.0).unwrap().message,
            "2.5 × 4 = 10"
        );
        assert_eq!(apply(Operator::Divide, 1.0, 4.0).unwrap().message, "1 ÷ 4 = 0.25");
        assert_eq!(apply(Operator::Modulus, 7.0, 3.0).unwrap().message, "7 % 3 = 1");
        assert_eq!(apply(Operator::Power, 2.0, 3.0).unwrap().message, "2 ^ 3 = 8");
        assert_eq!(apply(Operator::Sqrt, 9.0, 123.0).unwrap().message, "√9 = 3");
    }

    #[test]
    fn entry_equals_message() {
        let calc = apply(Operator::Subtract, 10.0, 0.5).unwrap();
        assert_eq!(calc.entry, calc.message);
        assert_eq!(calc.kind, CalcKind::Arithmetic);
        assert_eq!(calc.input, "10 - 0.5");
    }
}
