//! In-memory terminal for deterministic tests and headless use
//!
//! Models a fixed-size screen with auto-margin wrapping: writing into the last
//! column moves the cursor to the start of the next row. On the bottom row the
//! wrap is deferred until the next character, which scrolls the screen up
//! first, the way xterm-style terminals behave. Moves below the bottom row are
//! clamped to it. [`VirtualTerminal::new`] gives a screen too tall to ever
//! scroll.

use std::collections::VecDeque;

use crate::error::{HalError, HalResult};
use crate::key::KeyEvent;
use crate::terminal::{CursorPosition, Terminal, TextColors};

#[derive(Debug, Clone)]
pub struct VirtualTerminal {
    width: u16,
    height: u16,
    rows: Vec<Vec<char>>,
    cursor: CursorPosition,
    pending_wrap: bool,
    scrolled: usize,
    keys: VecDeque<KeyEvent>,
    hide_depth: usize,
    max_hide_depth: usize,
    bells: usize,
}

impl VirtualTerminal {
    pub fn new(width: u16) -> Self {
        Self::with_size(width, u16::MAX)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            rows: Vec::new(),
            cursor: CursorPosition::default(),
            pending_wrap: false,
            scrolled: 0,
            keys: VecDeque::new(),
            hide_depth: 0,
            max_hide_depth: 0,
            bells: 0,
        }
    }

    /// Queue a key to be returned by [`Terminal::read_key`].
    pub fn push_key(&mut self, key: KeyEvent) {
        self.keys.push_back(key);
    }

    pub fn push_keys<I: IntoIterator<Item = KeyEvent>>(&mut self, keys: I) {
        self.keys.extend(keys);
    }

    /// Queue one plain key per character of `text`.
    pub fn push_text(&mut self, text: &str) {
        self.push_keys(KeyEvent::typed(text));
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// Rows scrolled off the top so far.
    pub fn scrolled_rows(&self) -> usize {
        self.scrolled
    }

    /// Text of one row with trailing blanks removed.
    pub fn row_text(&self, row: u16) -> String {
        self.rows
            .get(usize::from(row))
            .map(|cells| cells.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.hide_depth == 0
    }

    /// Deepest nesting of `hide_cursor` seen so far.
    pub fn max_hide_depth(&self) -> usize {
        self.max_hide_depth
    }

    pub fn bell_count(&self) -> usize {
        self.bells
    }

    fn bottom(&self) -> u16 {
        self.height - 1
    }

    fn scroll(&mut self) {
        if !self.rows.is_empty() {
            self.rows.remove(0);
        }
        self.scrolled += 1;
    }

    /// Start of the next row, scrolling when already on the bottom one.
    fn next_row(&mut self) {
        if self.cursor.row >= self.bottom() {
            self.scroll();
            self.cursor = CursorPosition::new(0, self.bottom());
        } else {
            self.cursor = CursorPosition::new(0, self.cursor.row + 1);
        }
    }

    fn put(&mut self, c: char) {
        if self.pending_wrap {
            self.pending_wrap = false;
            self.next_row();
        }

        let row = usize::from(self.cursor.row);
        let column = usize::from(self.cursor.column);
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= column {
            cells.resize(column + 1, ' ');
        }
        cells[column] = c;

        if self.cursor.column + 1 < self.width {
            self.cursor.column += 1;
        } else if self.cursor.row >= self.bottom() {
            self.pending_wrap = true;
        } else {
            self.cursor = CursorPosition::new(0, self.cursor.row + 1);
        }
    }
}

impl Terminal for VirtualTerminal {
    fn read_key(&mut self) -> HalResult<KeyEvent> {
        self.keys.pop_front().ok_or(HalError::InputExhausted)
    }

    fn cursor_position(&mut self) -> HalResult<CursorPosition> {
        Ok(self.cursor)
    }

    fn set_cursor_position(&mut self, position: CursorPosition) -> HalResult<()> {
        if position.column >= self.width {
            return Err(HalError::Unsupported(format!(
                "column {} outside a {}-column screen",
                position.column, self.width
            )));
        }
        self.pending_wrap = false;
        self.cursor = CursorPosition::new(position.column, position.row.min(self.bottom()));
        Ok(())
    }

    fn write_text(&mut self, text: &str, _colors: TextColors) -> HalResult<()> {
        for c in text.chars() {
            self.put(c);
        }
        Ok(())
    }

    fn write_line(&mut self) -> HalResult<()> {
        self.pending_wrap = false;
        self.next_row();
        Ok(())
    }

    fn hide_cursor(&mut self) -> HalResult<()> {
        self.hide_depth += 1;
        self.max_hide_depth = self.max_hide_depth.max(self.hide_depth);
        Ok(())
    }

    fn show_cursor(&mut self) -> HalResult<()> {
        self.hide_depth = self.hide_depth.saturating_sub(1);
        Ok(())
    }

    fn window_width(&mut self) -> HalResult<u16> {
        Ok(self.width)
    }

    fn window_height(&mut self) -> HalResult<u16> {
        Ok(self.height)
    }

    fn bell(&mut self) -> HalResult<()> {
        self.bells += 1;
        Ok(())
    }
}
