//! Line editor: turns key events into a submitted line
//!
//! Each [`LineEditor::read_line`] call captures the cursor as the start of a
//! new logical line and loops on key events until Enter. Every key is handled
//! to completion (buffer edit, cursor math, redraw) before the next read. The
//! hardware cursor is the single source of truth for "where am I in the line";
//! it is mapped back to a buffer index through [`LineGeometry`] whenever an
//! edit depends on it.
//!
//! A line that grows past the bottom row scrolls the screen up, and the line's
//! start row moves up with it.

use tracing::{debug, trace, warn};

use entryline_hal::{CursorPosition, Key, KeyEvent, Terminal};

use crate::buffer::EditBuffer;
use crate::completion::{Completer, CompletionCycler, CycleDirection};
use crate::config::EditorConfig;
use crate::cursor::LineGeometry;
use crate::error::EditorResult;
use crate::history::HistoryLog;

/// How a typed character merges into the middle of the line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Insert,
    Overwrite,
}

impl InputMode {
    fn toggled(self) -> Self {
        match self {
            InputMode::Insert => InputMode::Overwrite,
            InputMode::Overwrite => InputMode::Insert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recall {
    Older,
    Newer,
}

/// State that lives for one `read_line` call
#[derive(Debug)]
struct Session {
    geometry: LineGeometry,
    bottom_row: u16,
    buffer: EditBuffer,
    cycler: Option<CompletionCycler>,
    /// Longest line drawn so far; redraws blank this many cells
    longest: usize,
}

impl Session {
    fn new(geometry: LineGeometry, height: u16, capacity: usize) -> Self {
        Self {
            geometry,
            bottom_row: height.saturating_sub(1),
            buffer: EditBuffer::new(capacity),
            cycler: None,
            longest: 0,
        }
    }

    /// Bookkeeping after any edit other than completion cycling.
    fn edited(&mut self) {
        self.cycler = None;
        self.measure();
    }

    fn measure(&mut self) {
        self.longest = self.longest.max(self.buffer.len());
    }
}

/// Shell-style line editor over a shared terminal.
///
/// Owns the terminal, the completion source, and the history for its whole
/// lifetime.
pub struct LineEditor<T: Terminal, C: Completer> {
    terminal: T,
    completer: C,
    history: HistoryLog,
    config: EditorConfig,
    mode: InputMode,
}

impl<T: Terminal, C: Completer> LineEditor<T, C> {
    pub fn new(terminal: T, completer: C) -> Self {
        let config = EditorConfig::default();
        Self {
            history: HistoryLog::new(config.history_limit),
            terminal,
            completer,
            config,
            mode: InputMode::default(),
        }
    }

    /// Fails fast on an invalid configuration.
    pub fn with_config(terminal: T, completer: C, config: EditorConfig) -> EditorResult<Self> {
        config.validate()?;
        Ok(Self {
            history: HistoryLog::new(config.history_limit),
            terminal,
            completer,
            config,
            mode: InputMode::default(),
        })
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    /// Write `prompt` and edit a line after it.
    pub fn read_line_with_prompt(&mut self, prompt: &str) -> EditorResult<String> {
        self.terminal.write_text(prompt, self.config.prompt_colors)?;
        self.read_line()
    }

    /// Edit a line starting at the current cursor position until Enter.
    ///
    /// Only terminal failures end the loop early; every editing condition
    /// (full buffer, movement past either end, unbound keys) is a no-op.
    pub fn read_line(&mut self) -> EditorResult<String> {
        let start = self.terminal.cursor_position()?;
        let width = self.terminal.window_width()?;
        let height = self.terminal.window_height()?;
        let geometry = LineGeometry::new(start, width);
        let mut session = Session::new(geometry, height, self.config.max_len);
        debug!(
            "line session started at ({}, {}), screen {}x{}",
            start.column, start.row, width, height
        );

        loop {
            let key = self.terminal.read_key()?;
            if let Some(line) = self.dispatch(&mut session, key)? {
                return Ok(line);
            }
        }
    }

    fn dispatch(&mut self, session: &mut Session, event: KeyEvent) -> EditorResult<Option<String>> {
        trace!("key {:?}", event);
        match event.key {
            Key::Enter => return self.submit(session).map(Some),
            Key::Tab => {
                let direction = if event.modifiers.shift {
                    CycleDirection::Backward
                } else {
                    CycleDirection::Forward
                };
                self.complete(session, direction)?;
            }
            Key::Backspace => self.backspace(session)?,
            Key::Delete => self.delete(session)?,
            Key::Left => self.step_cursor(session, false)?,
            Key::Right => self.step_cursor(session, true)?,
            Key::Insert => {
                self.mode = self.mode.toggled();
                debug!("input mode {:?}", self.mode);
            }
            Key::Home => self.terminal.set_cursor_position(session.geometry.start())?,
            Key::End => {
                let end = session.geometry.position_for_index(session.buffer.len());
                self.terminal.set_cursor_position(end)?;
            }
            Key::PageUp => self.recall(session, Recall::Older)?,
            Key::PageDown => self.recall(session, Recall::Newer)?,
            Key::Char(_) => match event.printable() {
                Some(c) => self.type_char(session, c)?,
                // Ctrl+V and other chords; paste is not supported
                None => trace!("ignored chord {:?}", event),
            },
            // Reserved: Up/Down for multi-line input, Escape for line reset
            Key::Up | Key::Down | Key::Escape | Key::Unsupported => {
                trace!("no binding for {:?}", event.key)
            }
        }
        Ok(None)
    }

    fn submit(&mut self, session: &mut Session) -> EditorResult<String> {
        // Leave the cursor after the last row of the line so later output
        // starts below it
        let last = session.buffer.len().saturating_sub(1);
        let end = session.geometry.position_for_index(last);
        self.terminal.set_cursor_position(end)?;
        self.terminal.write_line()?;

        let line = session.buffer.to_string();
        let recorded = self.history.record(&line);
        debug!(
            "line submitted ({} chars, recorded: {})",
            session.buffer.len(),
            recorded
        );
        Ok(line)
    }

    fn type_char(&mut self, session: &mut Session, c: char) -> EditorResult<()> {
        let Some(index) = self.cursor_index(session)? else {
            return Ok(());
        };
        let chars = [c];
        let edit = if index == session.buffer.len() {
            // Appending at the tail is the same in both modes
            session.buffer.insert_at(index, &chars)
        } else {
            match self.mode {
                InputMode::Overwrite => session.buffer.overwrite_at(index, &chars),
                InputMode::Insert => session.buffer.insert_at(index, &chars),
            }
        };

        if let Err(full) = edit {
            debug!("dropped {:?}: {}", c, full);
            if self.config.bell_on_overflow {
                self.terminal.bell()?;
            }
            return Ok(());
        }
        session.edited();

        let len = session.buffer.len();
        self.with_hidden_cursor(|editor| {
            editor.reserve_rows(session, len)?;
            editor.redraw(session)?;
            let target = session.geometry.position_for_index(index + 1);
            editor.terminal.set_cursor_position(target)?;
            Ok(())
        })
    }

    fn backspace(&mut self, session: &mut Session) -> EditorResult<()> {
        let index = match self.cursor_index(session)? {
            Some(index) if index > 0 => index,
            _ => return Ok(()),
        };

        self.with_hidden_cursor(|editor| {
            session.buffer.remove_before(index, 1);
            session.edited();
            editor.redraw(session)?;
            let target = session.geometry.position_for_index(index - 1);
            editor.terminal.set_cursor_position(target)?;
            Ok(())
        })
    }

    fn delete(&mut self, session: &mut Session) -> EditorResult<()> {
        let index = match self.cursor_index(session)? {
            Some(index) if index < session.buffer.len() => index,
            _ => return Ok(()),
        };

        self.with_hidden_cursor(|editor| {
            session.buffer.remove_at(index, 1);
            session.edited();
            editor.redraw(session)?;
            let target = session.geometry.position_for_index(index);
            editor.terminal.set_cursor_position(target)?;
            Ok(())
        })
    }

    fn step_cursor(&mut self, session: &Session, forward: bool) -> EditorResult<()> {
        let Some(index) = self.cursor_index(session)? else {
            return Ok(());
        };
        let target = if forward {
            if index >= session.buffer.len() {
                return Ok(());
            }
            index + 1
        } else {
            if index == 0 {
                return Ok(());
            }
            index - 1
        };
        let position = session.geometry.position_for_index(target);
        self.terminal.set_cursor_position(position)?;
        Ok(())
    }

    fn complete(&mut self, session: &mut Session, direction: CycleDirection) -> EditorResult<()> {
        if session.cycler.is_none() {
            let query = session.buffer.to_string();
            session.cycler = Some(CompletionCycler::start(&self.completer, &query));
        }

        let candidate = session
            .cycler
            .as_mut()
            .and_then(|cycler| cycler.advance(direction))
            .map(str::to_owned);
        match candidate {
            Some(text) => self.replace_line(session, &text),
            None => Ok(()),
        }
    }

    fn recall(&mut self, session: &mut Session, recall: Recall) -> EditorResult<()> {
        let entry = match recall {
            Recall::Older => self.history.previous(),
            Recall::Newer => self.history.next_entry(),
        }
        .map(str::to_owned);

        if let Some(entry) = entry {
            session.cycler = None;
            self.replace_line(session, &entry)?;
        }
        Ok(())
    }

    /// Swap the whole line for `text`: blank the longest line seen, write the
    /// new text, leave the cursor after it.
    fn replace_line(&mut self, session: &mut Session, text: &str) -> EditorResult<()> {
        if session.buffer.replace_with(text) {
            debug!("replacement truncated to {} chars", session.buffer.capacity());
        }
        session.measure();

        let blank = " ".repeat(session.longest);
        let content = session.buffer.to_string();
        let last = session.buffer.len().max(session.longest.saturating_sub(1));
        self.with_hidden_cursor(|editor| {
            editor.reserve_rows(session, last)?;
            let start = session.geometry.start();
            let end = session.geometry.position_for_index(session.buffer.len());
            let colors = editor.config.command_colors;
            editor.terminal.set_cursor_position(start)?;
            editor.terminal.write_text(&blank, colors)?;
            editor.terminal.set_cursor_position(start)?;
            editor.terminal.write_text(&content, colors)?;
            editor.terminal.set_cursor_position(end)?;
            Ok(())
        })
    }

    /// Rewrite the line from its start, blanking cells up to the longest line
    /// drawn so far. Leaves the cursor wherever the write ends.
    fn redraw(&mut self, session: &Session) -> EditorResult<()> {
        let mut text = session.buffer.to_string();
        let padding = session.longest.saturating_sub(session.buffer.len());
        text.extend(std::iter::repeat(' ').take(padding));

        self.terminal.set_cursor_position(session.geometry.start())?;
        self.terminal.write_text(&text, self.config.command_colors)?;
        Ok(())
    }

    /// Scroll the screen until the cell of `index` is on it, moving the line
    /// start up by as many rows. A line taller than the screen stops scrolling
    /// once its start reaches row 0.
    fn reserve_rows(&mut self, session: &mut Session, index: usize) -> EditorResult<()> {
        let row = session.geometry.position_for_index(index).row;
        let lift = row
            .saturating_sub(session.bottom_row)
            .min(session.geometry.start().row);
        if lift == 0 {
            return Ok(());
        }

        let bottom = CursorPosition::new(0, session.bottom_row);
        self.terminal.set_cursor_position(bottom)?;
        for _ in 0..lift {
            self.terminal.write_line()?;
        }
        session.geometry.scroll_up(lift);
        debug!("scrolled {} rows; line now starts on row {}", lift, session.geometry.start().row);
        Ok(())
    }

    /// Buffer index under the hardware cursor, clamped to the end of the line.
    ///
    /// A cursor before the start of the line was moved by someone else; it is
    /// put back at the end of the line and `None` is returned.
    fn cursor_index(&mut self, session: &Session) -> EditorResult<Option<usize>> {
        let position = self.terminal.cursor_position()?;
        let len = session.buffer.len();
        match session.geometry.index_for_position(position) {
            Some(index) => Ok(Some(index.min(len))),
            None => {
                warn!(
                    "cursor at ({}, {}) is before the line start; moving it to the end",
                    position.column, position.row
                );
                let end = session.geometry.position_for_index(len);
                self.terminal.set_cursor_position(end)?;
                Ok(None)
            }
        }
    }

    /// Run `draw` with the cursor hidden; visibility is restored even when
    /// `draw` fails.
    fn with_hidden_cursor<F>(&mut self, draw: F) -> EditorResult<()>
    where
        F: FnOnce(&mut Self) -> EditorResult<()>,
    {
        self.terminal.hide_cursor()?;
        let drawn = draw(self);
        let shown = self.terminal.show_cursor();
        drawn?;
        shown?;
        Ok(())
    }
}
