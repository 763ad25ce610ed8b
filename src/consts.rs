/// Clock format stamped on scientific history entries: "14:03:27"
pub(crate) const TIME_FORMAT: &str = "%H:%M:%S";

/// Tag that marks history entries produced by the expression evaluator
pub(crate) const SCIENTIFIC_TAG: &str = "[Scientific]";

/// How many history entries `history` shows when no limit is given
pub(crate) const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Shown instead of an empty history listing
pub(crate) const EMPTY_HISTORY: &str = "No calculations yet.";

/// Environment variable pointing at an explicit config file
pub(crate) const CONFIG_ENV: &str = "SCICALC_CONFIG";
