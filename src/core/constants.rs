//! Named constants substituted into formulas before evaluation

use std::collections::BTreeMap;

use crate::error::AppError;

use super::types::format_value;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Constant {
    pub(crate) name: String,
    pub(crate) value: f64,
}

/// Immutable name → value table.
///
/// Entries are kept longest name first so that a name contained in another
/// name (`e` inside `c (speed of light)`) is never replaced before it.
#[derive(Debug, Clone)]
pub(crate) struct ConstantTable {
    entries: Vec<Constant>,
}

impl Default for ConstantTable {
    fn default() -> Self {
        Self::from_pairs(Self::builtin())
    }
}

impl ConstantTable {
    fn builtin() -> Vec<(String, f64)> {
        vec![
            ("π".to_string(), std::f64::consts::PI),
            ("pi".to_string(), std::f64::consts::PI),
            ("e".to_string(), std::f64::consts::E),
            ("g (gravity)".to_string(), 9.80665),
            ("c (speed of light)".to_string(), 299_792_458.0),
        ]
    }

    fn from_pairs(pairs: Vec<(String, f64)>) -> Self {
        let mut entries: Vec<Constant> = pairs
            .into_iter()
            .map(|(name, value)| Constant { name, value })
            .collect();
        entries.sort_by(|a, b| {
            b.name
                .chars()
                .count()
                .cmp(&a.name.chars().count())
                .then_with(|| a.name.cmp(&b.name))
        });
        Self { entries }
    }

    /// Built-in constants plus user-defined ones.
    ///
    /// User names are trimmed; they must be non-empty, must not shadow a built-in
    /// and must map to a finite value.
    pub(crate) fn with_extra(extra: &BTreeMap<String, f64>) -> Result<Self, AppError> {
        let mut pairs = Self::builtin();
        for (raw_name, &value) in extra {
            let name = raw_name.trim();
            if name.is_empty() {
                return Err(AppError::InvalidConstant {
                    name: raw_name.clone(),
                    reason: "name must not be empty".to_string(),
                });
            }
            if pairs.iter().any(|(existing, _)| existing == name) {
                return Err(AppError::InvalidConstant {
                    name: name.to_string(),
                    reason: "built-in constants cannot be redefined".to_string(),
                });
            }
            if !value.is_finite() {
                return Err(AppError::InvalidConstant {
                    name: name.to_string(),
                    reason: "value must be finite".to_string(),
                });
            }
            pairs.push((name.to_string(), value));
        }
        Ok(Self::from_pairs(pairs))
    }

    /// Entries in substitution order
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Constant> {
        self.entries.iter()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|c| c.name == name).map(|c| c.value)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Replace every standalone occurrence of every constant name with its value.
    pub(crate) fn substitute(&self, formula: &str) -> String {
        let mut text = formula.to_string();
        for constant in &self.entries {
            let literal = if constant.value < 0.0 {
                format!("({})", format_value(constant.value))
            } else {
                format_value(constant.value)
            };
            text = replace_standalone(&text, &constant.name, &literal);
        }
        text
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// Replace `name` with `replacement` wherever it does not run into a
/// neighbouring identifier. The boundary is only checked on a side of `name`
/// that itself ends in an identifier character, so `g (gravity)` still matches
/// in `g (gravity)*2`.
fn replace_standalone(text: &str, name: &str, replacement: &str) -> String {
    let (Some(first), Some(last)) = (name.chars().next(), name.chars().next_back()) else {
        return text.to_string();
    };
    let check_before = is_ident_char(first);
    let check_after = is_ident_char(last);

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(name) {
        let before = rest[..pos].chars().next_back().or_else(|| {
            // Nothing earlier in `rest`: look at what has already been copied.
            out.chars().next_back()
        });
        let after = rest[pos + name.len()..].chars().next();

        let blocked_before = check_before && before.is_some_and(is_ident_char);
        let blocked_after = check_after && after.is_some_and(is_ident_char);

        out.push_str(&rest[..pos]);
        if blocked_before || blocked_after {
            out.push_str(name);
        } else {
            out.push_str(replacement);
        }
        rest = &rest[pos + name.len()..];
    }
    out.push_str(rest);
    out
}
