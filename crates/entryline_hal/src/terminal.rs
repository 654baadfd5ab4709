//! Terminal capability consumed by the line editor

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::HalResult;
use crate::key::KeyEvent;

/// Screen coordinates of a character cell, zero-based
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    pub column: u16,
    pub row: u16,
}

impl CursorPosition {
    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

/// The classic sixteen console colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleColor {
    /// Whatever the terminal's default is
    Reset,
    Black,
    DarkGrey,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Grey,
}

impl From<ConsoleColor> for Color {
    fn from(color: ConsoleColor) -> Self {
        match color {
            ConsoleColor::Reset => Color::Reset,
            ConsoleColor::Black => Color::Black,
            ConsoleColor::DarkGrey => Color::DarkGrey,
            ConsoleColor::Red => Color::Red,
            ConsoleColor::DarkRed => Color::DarkRed,
            ConsoleColor::Green => Color::Green,
            ConsoleColor::DarkGreen => Color::DarkGreen,
            ConsoleColor::Yellow => Color::Yellow,
            ConsoleColor::DarkYellow => Color::DarkYellow,
            ConsoleColor::Blue => Color::Blue,
            ConsoleColor::DarkBlue => Color::DarkBlue,
            ConsoleColor::Magenta => Color::Magenta,
            ConsoleColor::DarkMagenta => Color::DarkMagenta,
            ConsoleColor::Cyan => Color::Cyan,
            ConsoleColor::DarkCyan => Color::DarkCyan,
            ConsoleColor::White => Color::White,
            ConsoleColor::Grey => Color::Grey,
        }
    }
}

/// Foreground/background pair used for a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextColors {
    pub foreground: ConsoleColor,
    pub background: ConsoleColor,
}

impl TextColors {
    pub const fn new(foreground: ConsoleColor, background: ConsoleColor) -> Self {
        Self {
            foreground,
            background,
        }
    }
}

impl Default for TextColors {
    fn default() -> Self {
        Self::new(ConsoleColor::Reset, ConsoleColor::Reset)
    }
}

/// Character-cell terminal shared with other output.
///
/// `hide_cursor` and `show_cursor` calls are always paired by callers.
pub trait Terminal {
    /// Block until the next key press is available.
    fn read_key(&mut self) -> HalResult<KeyEvent>;

    fn cursor_position(&mut self) -> HalResult<CursorPosition>;

    fn set_cursor_position(&mut self, position: CursorPosition) -> HalResult<()>;

    /// Write `text` at the cursor, advancing it.
    fn write_text(&mut self, text: &str, colors: TextColors) -> HalResult<()>;

    /// Move to the first column of the next row.
    fn write_line(&mut self) -> HalResult<()>;

    fn hide_cursor(&mut self) -> HalResult<()>;

    fn show_cursor(&mut self) -> HalResult<()>;

    /// Current number of columns.
    fn window_width(&mut self) -> HalResult<u16>;

    /// Current number of rows. Moves below the last row are clamped to it,
    /// and a newline there scrolls the screen up.
    fn window_height(&mut self) -> HalResult<u16>;

    /// Audible/visual alert. Terminals without one ignore it.
    fn bell(&mut self) -> HalResult<()> {
        Ok(())
    }
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn read_key(&mut self) -> HalResult<KeyEvent> {
        (**self).read_key()
    }

    fn cursor_position(&mut self) -> HalResult<CursorPosition> {
        (**self).cursor_position()
    }

    fn set_cursor_position(&mut self, position: CursorPosition) -> HalResult<()> {
        (**self).set_cursor_position(position)
    }

    fn write_text(&mut self, text: &str, colors: TextColors) -> HalResult<()> {
        (**self).write_text(text, colors)
    }

    fn write_line(&mut self) -> HalResult<()> {
        (**self).write_line()
    }

    fn hide_cursor(&mut self) -> HalResult<()> {
        (**self).hide_cursor()
    }

    fn show_cursor(&mut self) -> HalResult<()> {
        (**self).show_cursor()
    }

    fn window_width(&mut self) -> HalResult<u16> {
        (**self).window_width()
    }

    fn window_height(&mut self) -> HalResult<u16> {
        (**self).window_height()
    }

    fn bell(&mut self) -> HalResult<()> {
        (**self).bell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_colors_map_to_crossterm() {
        assert_eq!(Color::from(ConsoleColor::DarkCyan), Color::DarkCyan);
        assert_eq!(Color::from(ConsoleColor::Reset), Color::Reset);
    }

    #[test]
    fn default_colors_reset_both_channels() {
        let colors = TextColors::default();
        assert_eq!(colors.foreground, ConsoleColor::Reset);
        assert_eq!(colors.background, ConsoleColor::Reset);
    }
}
