use thiserror::Error;

/// Failures of a single computation. None of these ever reach the history log.
#[derive(Debug, Clone, PartialEq, Error)]
pub(crate) enum CalcError {
    #[error("Cannot divide by zero!")]
    DivisionByZero,

    #[error("{0}")]
    Domain(String),

    #[error("Error: {0}")]
    Expression(String),

    #[error("Conversion Error: {0}")]
    Conversion(String),
}

impl CalcError {
    /// Stable identifier used in JSON output
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "division_by_zero",
            CalcError::Domain(_) => "domain",
            CalcError::Expression(_) => "expression",
            CalcError::Conversion(_) => "conversion",
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unknown operator \"{input}\" (expected add, sub, mul, div, mod, pow or sqrt)")]
    UnknownOperator { input: String },

    #[error("Operator {op} needs a second operand")]
    MissingOperand { op: &'static str },

    #[error("Invalid constant \"{name}\": {reason}")]
    InvalidConstant { name: String, reason: String },

    #[error("Invalid number: {input}")]
    InvalidNumber { input: String },

    #[error("Usage: {0}")]
    Usage(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_error_messages() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Cannot divide by zero!");
        assert_eq!(
            CalcError::Expression("expected an expression".to_string()).to_string(),
            "Error: expected an expression"
        );
        assert_eq!(
            CalcError::Conversion("unknown identifier 'foo'".to_string()).to_string(),
            "Conversion Error: unknown identifier 'foo'"
        );
        assert_eq!(
            CalcError::Domain("Cannot take square root of negative number!".to_string())
                .to_string(),
            "Cannot take square root of negative number!"
        );
    }

    #[test]
    fn calc_error_kinds_are_distinct() {
        let kinds = [
            CalcError::DivisionByZero.kind(),
            CalcError::Domain(String::new()).kind(),
            CalcError::Expression(String::new()).kind(),
            CalcError::Conversion(String::new()).kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_display_operator() {
        let e = AppError::UnknownOperator {
            input: "frobnicate".to_string(),
        };
        assert!(e.to_string().starts_with(r#"Unknown operator "frobnicate""#));
    }

    #[test]
    fn app_error_display_constant() {
        let e = AppError::InvalidConstant {
            name: "x".to_string(),
            reason: "value must be finite".to_string(),
        };
        assert_eq!(e.to_string(), r#"Invalid constant "x": value must be finite"#);
    }
}
