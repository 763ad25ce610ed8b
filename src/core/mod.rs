//! Core module - the three computation paths and the session that records them

mod arithmetic;
mod backend;
mod constants;
mod expression;
mod history;
mod session;
mod types;
mod units;

pub(crate) use arithmetic::Operator;
pub(crate) use backend::FendBackend;
pub(crate) use constants::ConstantTable;
pub(crate) use history::History;
pub(crate) use session::Session;
pub(crate) use types::{Calculation, format_value};
