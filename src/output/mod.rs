mod format;
mod json;
mod table;

pub(crate) use format::{error_line, success_line};
pub(crate) use json::{
    calculation_json, constants_json, error_json, history_json, message_error_json,
};
pub(crate) use table::{render_constants_table, render_history_table};
