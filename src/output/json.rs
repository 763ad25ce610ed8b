use crate::core::{Calculation, ConstantTable, History};
use crate::error::CalcError;

fn to_json(value: &serde_json::Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}

pub(crate) fn calculation_json(calc: &Calculation) -> String {
    match serde_json::to_value(calc) {
        Ok(value) => to_json(&value),
        Err(e) => to_json(&serde_json::json!({ "error": e.to_string(), "kind": "internal" })),
    }
}

pub(crate) fn error_json(error: &CalcError) -> String {
    to_json(&serde_json::json!({
        "error": error.to_string(),
        "kind": error.kind(),
    }))
}

/// Generic failure outside a computation (bad command, bad operator)
pub(crate) fn message_error_json(message: &str) -> String {
    to_json(&serde_json::json!({
        "error": message,
        "kind": "usage",
    }))
}

pub(crate) fn history_json(history: &History, limit: usize) -> String {
    to_json(&serde_json::json!({
        "total": history.len(),
        "entries": history.recent(limit),
    }))
}

pub(crate) fn constants_json(constants: &ConstantTable) -> String {
    let entries: Vec<serde_json::Value> = constants
        .iter()
        .map(|c| serde_json::json!({ "name": c.name, "value": c.value }))
        .collect();
    to_json(&serde_json::Value::Array(entries))
}
