//! Bounded log of completed computations.
//!
//! Entries are immutable once recorded and kept newest first. When the log
//! is full the oldest entry is dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of entries retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Record of one completed computation.
///
/// The text is either `"<lhs> <symbol> <rhs> = <result>"` or
/// `"<op>(<operand>) = <result>"`.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("2 + 3 = 5");
/// assert_eq!(entry.text(), "2 + 3 = 5");
/// assert_eq!(entry.result(), Some("5"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    text: String,
    /// When the computation completed
    recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            recorded_at: Utc::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// The value after the `=` sign.
    pub fn result(&self) -> Option<&str> {
        result_of(&self.text)
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Extract the value following the first `=` of an entry's text.
///
/// Returns `None` when there is no `=` or nothing follows it.
///
/// ```rust
/// use deskcalc::core::result_of;
///
/// assert_eq!(result_of("sqrt(16) = 4"), Some("4"));
/// assert_eq!(result_of("no result"), None);
/// ```
pub fn result_of(text: &str) -> Option<&str> {
    let (_, value) = text.split_once('=')?;
    let value = value.trim_start();
    (!value.is_empty()).then_some(value)
}

/// Newest-first, capacity-bounded history.
///
/// # Example
///
/// ```rust
/// use deskcalc::core::HistoryLog;
///
/// let mut history = HistoryLog::with_capacity(2);
/// history.append("1 + 1 = 2");
/// history.append("2 + 2 = 4");
/// history.append("3 + 3 = 6");
///
/// let texts: Vec<&str> = history.texts().collect();
/// assert_eq!(texts, vec!["3 + 3 = 6", "2 + 2 = 4"]);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// A log retaining at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert at the front, evicting from the tail beyond capacity.
    pub fn append(&mut self, entry: impl Into<String>) {
        self.entries.insert(0, HistoryEntry::new(entry));
        self.entries.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(HistoryEntry::text)
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
