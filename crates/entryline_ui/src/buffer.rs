//! Capacity-bounded character buffer holding the line being edited

use std::fmt;

use thiserror::Error;

/// Default maximum number of characters in one line
pub const MAX_LEN: usize = 1024;

/// An edit would grow the buffer past its capacity. Nothing was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("line buffer is full ({capacity} characters)")]
pub struct BufferFull {
    pub capacity: usize,
}

/// Characters `[0, len)` of the line; nothing past `len` is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    content: Vec<char>,
    capacity: usize,
}

impl Default for EditBuffer {
    fn default() -> Self {
        Self::new(MAX_LEN)
    }
}

impl EditBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            content: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert `chars` at `pos`, shifting `[pos, len)` right.
    ///
    /// `pos` past the end appends.
    pub fn insert_at(&mut self, pos: usize, chars: &[char]) -> Result<(), BufferFull> {
        if self.content.len() + chars.len() > self.capacity {
            return Err(self.full());
        }
        let pos = pos.min(self.content.len());
        self.content.splice(pos..pos, chars.iter().copied());
        Ok(())
    }

    /// Write `chars` over `[pos, pos + chars.len())` without shifting.
    ///
    /// Whatever runs past the current end extends the line.
    pub fn overwrite_at(&mut self, pos: usize, chars: &[char]) -> Result<(), BufferFull> {
        let pos = pos.min(self.content.len());
        let end = pos + chars.len();
        if end > self.capacity {
            return Err(self.full());
        }

        let overlap = self.content.len().min(end) - pos;
        self.content[pos..pos + overlap].copy_from_slice(&chars[..overlap]);
        self.content.extend_from_slice(&chars[overlap..]);
        Ok(())
    }

    /// Remove up to `qty` characters ending just before `pos`, shifting the
    /// tail left. Returns how many were removed; nothing happens at `pos == 0`.
    pub fn remove_before(&mut self, pos: usize, qty: usize) -> usize {
        let pos = pos.min(self.content.len());
        let from = pos.saturating_sub(qty);
        self.content.drain(from..pos);
        pos - from
    }

    /// Remove up to `qty` characters starting at `pos`, shifting the tail left.
    /// Returns how many were removed; nothing happens at or past the end.
    pub fn remove_at(&mut self, pos: usize, qty: usize) -> usize {
        let len = self.content.len();
        if pos >= len {
            return 0;
        }
        let to = len.min(pos.saturating_add(qty));
        self.content.drain(pos..to);
        to - pos
    }

    /// Replace the whole line with `text`, truncated to capacity.
    ///
    /// Returns `true` if characters had to be dropped.
    pub fn replace_with(&mut self, text: &str) -> bool {
        self.content.clear();
        self.content.extend(text.chars().take(self.capacity));
        text.chars().nth(self.capacity).is_some()
    }

    fn full(&self) -> BufferFull {
        BufferFull {
            capacity: self.capacity,
        }
    }
}

impl fmt::Display for EditBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.content.iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> EditBuffer {
        let mut buffer = EditBuffer::new(8);
        buffer.replace_with(text);
        buffer
    }

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn insert_at_start() {
        let mut buf = buffer("abc");
        buf.insert_at(0, &chars("XY")).unwrap();
        assert_eq!(buf.to_string(), "XYabc");
    }

    #[test]
    fn insert_at_end_appends() {
        let mut buf = buffer("abc");
        buf.insert_at(3, &chars("d")).unwrap();
        assert_eq!(buf.to_string(), "abcd");
        buf.insert_at(99, &chars("e")).unwrap();
        assert_eq!(buf.to_string(), "abcde");
    }

    #[test]
    fn insert_in_middle_shifts_tail() {
        let mut buf = buffer("abc");
        buf.insert_at(1, &chars("X")).unwrap();
        assert_eq!(buf.to_string(), "aXbc");
    }

    #[test]
    fn insert_past_capacity_is_rejected_unchanged() {
        let mut buf = buffer("abcdefg");
        assert_eq!(buf.insert_at(0, &chars("12")), Err(BufferFull { capacity: 8 }));
        assert_eq!(buf.to_string(), "abcdefg");
        buf.insert_at(7, &chars("h")).unwrap();
        assert_eq!(buf.len(), buf.capacity());
        assert!(buf.insert_at(8, &chars("i")).is_err());
    }

    #[test]
    fn overwrite_at_start_keeps_length() {
        let mut buf = buffer("abc");
        buf.overwrite_at(0, &chars("X")).unwrap();
        assert_eq!(buf.to_string(), "Xbc");
    }

    #[test]
    fn overwrite_at_end_extends() {
        let mut buf = buffer("abc");
        buf.overwrite_at(3, &chars("d")).unwrap();
        assert_eq!(buf.to_string(), "abcd");
    }

    #[test]
    fn overwrite_across_end_extends_by_overflow_only() {
        let mut buf = buffer("abc");
        buf.overwrite_at(2, &chars("XYZ")).unwrap();
        assert_eq!(buf.to_string(), "abXYZ");
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn overwrite_in_middle_of_full_buffer_is_allowed() {
        let mut buf = buffer("abcdefgh");
        buf.overwrite_at(4, &chars("X")).unwrap();
        assert_eq!(buf.to_string(), "abcdXfgh");
        assert!(buf.overwrite_at(8, &chars("i")).is_err());
    }

    #[test]
    fn remove_before_start_is_noop() {
        let mut buf = buffer("abc");
        assert_eq!(buf.remove_before(0, 1), 0);
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn remove_before_end_trims_last() {
        let mut buf = buffer("abc");
        assert_eq!(buf.remove_before(3, 1), 1);
        assert_eq!(buf.to_string(), "ab");
    }

    #[test]
    fn remove_before_middle_shifts_tail() {
        let mut buf = buffer("abcd");
        assert_eq!(buf.remove_before(2, 1), 1);
        assert_eq!(buf.to_string(), "acd");
        assert_eq!(buf.remove_before(1, 5), 1);
        assert_eq!(buf.to_string(), "cd");
    }

    #[test]
    fn remove_at_start_and_end() {
        let mut buf = buffer("abc");
        assert_eq!(buf.remove_at(3, 1), 0);
        assert_eq!(buf.remove_at(0, 1), 1);
        assert_eq!(buf.to_string(), "bc");
        assert_eq!(buf.remove_at(1, 10), 1);
        assert_eq!(buf.to_string(), "b");
    }

    #[test]
    fn replace_truncates_to_capacity() {
        let mut buf = EditBuffer::new(4);
        assert!(buf.replace_with("abcdef"));
        assert_eq!(buf.to_string(), "abcd");
        assert!(!buf.replace_with("xy"));
        assert_eq!(buf.to_string(), "xy");
    }
}
