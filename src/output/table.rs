use crate::consts::EMPTY_HISTORY;
use crate::core::{ConstantTable, History, format_value};
use crate::output::format::{create_styled_table, header_cell, right_cell};

/// Most recent `limit` history entries, newest first, numbered from 1.
/// Empty history renders the placeholder instead of an empty table.
pub(crate) fn render_history_table(history: &History, limit: usize, use_color: bool) -> String {
    if history.is_empty() {
        return EMPTY_HISTORY.to_string();
    }

    let mut table = create_styled_table();
    table.set_header(vec![header_cell("#", use_color), header_cell("Calculation", use_color)]);
    for (i, entry) in history.recent(limit).into_iter().enumerate() {
        table.add_row(vec![right_cell(&(i + 1).to_string()), comfy_table::Cell::new(entry)]);
    }

    let shown = limit.min(history.len());
    if shown < history.len() {
        format!("{table}\n  {shown} of {} entries shown", history.len())
    } else {
        table.to_string()
    }
}

pub(crate) fn render_constants_table(constants: &ConstantTable, use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Name", use_color), header_cell("Value", use_color)]);
    for constant in constants.iter() {
        table.add_row(vec![
            comfy_table::Cell::new(&constant.name),
            right_cell(&format_value(constant.value)),
        ]);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_shows_placeholder() {
        assert_eq!(render_history_table(&History::new(), 20, false), EMPTY_HISTORY);
    }

    #[test]
    fn history_table_lists_newest_first() {
        let mut history = History::new();
        history.append("first");
        history.append("second");
        let text = render_history_table(&history, 20, false);
        let second = text.find("second").unwrap();
        let first = text.find("first").unwrap();
        assert!(second < first);
        assert!(!text.contains("entries shown"));
    }

    #[test]
    fn history_table_respects_limit() {
        let mut history = History::new();
        for i in 0..5 {
            history.append(format!("entry-{i}"));
        }
        let text = render_history_table(&history, 2, false);
        assert!(text.contains("entry-4"));
        assert!(text.contains("entry-3"));
        assert!(!text.contains("entry-2"));
        assert!(text.ends_with("2 of 5 entries shown"));
    }

    #[test]
    fn constants_table_lists_builtins() {
        let text = render_constants_table(&ConstantTable::default(), false);
        assert!(text.contains("g (gravity)"));
        assert!(text.contains("9.80665"));
        assert!(text.contains("299792458"));
    }
}
