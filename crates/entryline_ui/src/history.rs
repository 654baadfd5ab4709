//! In-memory history of submitted lines with PageUp/PageDown browsing

use std::collections::VecDeque;

/// Default number of lines kept before the oldest are evicted
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Append-ordered submitted lines.
///
/// The navigation cursor ranges over `[0, len]`; `len` means "past the newest
/// entry", which is where it rests after every submit.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<String>,
    cursor: usize,
    limit: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl HistoryLog {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            limit: limit.max(1),
        }
    }

    /// Append `line` unless it is blank or repeats the newest entry, then
    /// reset navigation. Returns whether the line was stored.
    pub fn record(&mut self, line: &str) -> bool {
        let repeated = self.entries.back().map(String::as_str) == Some(line);
        let stored = !line.trim().is_empty() && !repeated;
        if stored {
            self.entries.push_back(line.to_string());
            while self.entries.len() > self.limit {
                self.entries.pop_front();
            }
        }
        self.reset_navigation();
        stored
    }

    /// Point the navigation cursor past the newest entry.
    pub fn reset_navigation(&mut self) {
        self.cursor = self.entries.len();
    }

    /// Step to the next older entry. `None` at the oldest.
    pub fn previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step to the next newer entry. `None` at the newest.
    pub fn next_entry(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(lines: &[&str]) -> HistoryLog {
        let mut history = HistoryLog::default();
        for line in lines {
            history.record(line);
        }
        history
    }

    #[test]
    fn consecutive_duplicates_are_stored_once() {
        let history = log(&["ls", "ls"]);
        assert_eq!(history.entries().collect::<Vec<_>>(), vec!["ls"]);
    }

    #[test]
    fn non_consecutive_duplicates_are_kept() {
        let history = log(&["ls", "pwd", "ls"]);
        assert_eq!(history.entries().collect::<Vec<_>>(), vec!["ls", "pwd", "ls"]);
    }

    #[test]
    fn blank_lines_are_not_stored() {
        let mut history = HistoryLog::default();
        assert!(!history.record(""));
        assert!(!history.record("  \t"));
        assert!(history.is_empty());
    }

    #[test]
    fn browse_back_and_forth() {
        let mut history = log(&["a", "b", "c"]);
        assert_eq!(history.previous(), Some("c"));
        assert_eq!(history.previous(), Some("b"));
        assert_eq!(history.previous(), Some("a"));
        assert_eq!(history.previous(), None);
        assert_eq!(history.next_entry(), Some("b"));
        assert_eq!(history.next_entry(), Some("c"));
        assert_eq!(history.next_entry(), None);
        assert_eq!(history.previous(), Some("b"));
    }

    #[test]
    fn next_before_browsing_is_noop() {
        let mut history = log(&["a"]);
        assert_eq!(history.next_entry(), None);
        assert_eq!(history.previous(), Some("a"));
    }

    #[test]
    fn record_resets_navigation_even_when_skipped() {
        let mut history = log(&["a", "b"]);
        history.previous();
        history.previous();
        history.record("");
        assert_eq!(history.previous(), Some("b"));
        assert_eq!(history.previous(), Some("a"));
    }

    #[test]
    fn limit_evicts_oldest() {
        let mut history = HistoryLog::new(2);
        history.record("a");
        history.record("b");
        history.record("c");
        assert_eq!(history.entries().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(history.previous(), Some("c"));
    }

    #[test]
    fn empty_history_browsing() {
        let mut history = HistoryLog::default();
        assert_eq!(history.previous(), None);
        assert_eq!(history.next_entry(), None);
    }
}
