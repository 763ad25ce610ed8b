//! Session-scoped, append-only history

/// Ordered record of successful computations.
///
/// Unbounded for the lifetime of the session; entries are never edited or
/// removed. Display limits are applied by callers through [`History::recent`].
#[derive(Debug, Default, Clone)]
pub(crate) struct History {
    entries: Vec<String>,
}

impl History {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// The last `n` entries, most recent first
    pub(crate) fn recent(&self, n: usize) -> Vec<&str> {
        self.entries
            .iter()
            .rev()
            .take(n)
            .map(String::as_str)
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
