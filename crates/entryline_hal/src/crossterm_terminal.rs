//! Real terminal backed by crossterm

use std::io::{stdout, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, disable_raw_mode, enable_raw_mode},
    QueueableCommand,
};
use tracing::{debug, warn};

use crate::error::HalResult;
use crate::key::KeyEvent;
use crate::terminal::{CursorPosition, Terminal, TextColors};

/// Terminal on the process's stdout.
///
/// Raw mode is enabled for the lifetime of the value and restored on drop.
pub struct CrosstermTerminal {
    out: Stdout,
}

impl CrosstermTerminal {
    pub fn new() -> HalResult<Self> {
        enable_raw_mode()?;
        debug!("raw mode enabled");
        Ok(Self { out: stdout() })
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = self.out.queue(cursor::Show).and_then(|out| out.flush());
        if let Err(e) = disable_raw_mode() {
            warn!("failed to restore terminal mode: {}", e);
        }
    }
}

impl Terminal for CrosstermTerminal {
    fn read_key(&mut self) -> HalResult<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Ignore key releases and auto-repeats; handle only distinct presses
                if key.kind == KeyEventKind::Press {
                    return Ok(KeyEvent::from(key));
                }
            }
        }
    }

    fn cursor_position(&mut self) -> HalResult<CursorPosition> {
        self.out.flush()?;
        let (column, row) = cursor::position()?;
        Ok(CursorPosition::new(column, row))
    }

    fn set_cursor_position(&mut self, position: CursorPosition) -> HalResult<()> {
        self.out.queue(cursor::MoveTo(position.column, position.row))?;
        self.out.flush()?;
        Ok(())
    }

    fn write_text(&mut self, text: &str, colors: TextColors) -> HalResult<()> {
        self.out
            .queue(SetForegroundColor(colors.foreground.into()))?
            .queue(SetBackgroundColor(colors.background.into()))?
            .queue(Print(text))?
            .queue(ResetColor)?;
        self.out.flush()?;
        Ok(())
    }

    fn write_line(&mut self) -> HalResult<()> {
        // No output post-processing in raw mode
        self.out.queue(Print("\r\n"))?;
        self.out.flush()?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> HalResult<()> {
        self.out.queue(cursor::Hide)?;
        self.out.flush()?;
        Ok(())
    }

    fn show_cursor(&mut self) -> HalResult<()> {
        self.out.queue(cursor::Show)?;
        self.out.flush()?;
        Ok(())
    }

    fn window_width(&mut self) -> HalResult<u16> {
        let (width, _) = terminal::size()?;
        Ok(width)
    }

    fn window_height(&mut self) -> HalResult<u16> {
        let (_, height) = terminal::size()?;
        Ok(height)
    }

    fn bell(&mut self) -> HalResult<()> {
        self.out.queue(Print('\u{7}'))?;
        self.out.flush()?;
        Ok(())
    }
}
