//! Key event model consumed by the line editor
//!
//! The editor dispatches over [`Key`] with a single `match`, so every key kind
//! the terminal can deliver has to be one of these variants.

use crossterm::event::{KeyCode, KeyEvent as CrosstermKeyEvent, KeyModifiers};

/// Logical key identity, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Tab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Escape,
    Char(char),
    /// Anything the backend reports that the editor has no binding for
    /// (function keys, media keys, ...)
    Unsupported,
}

/// Modifier keys held while the key was pressed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
        alt: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        control: false,
        alt: false,
    };

    pub const CONTROL: Modifiers = Modifiers {
        shift: false,
        control: true,
        alt: false,
    };
}

impl From<KeyModifiers> for Modifiers {
    fn from(modifiers: KeyModifiers) -> Self {
        Self {
            shift: modifiers.contains(KeyModifiers::SHIFT),
            control: modifiers.contains(KeyModifiers::CONTROL),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

/// A single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Key pressed without modifiers
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Character key pressed without modifiers
    pub fn char(c: char) -> Self {
        Self::plain(Key::Char(c))
    }

    pub fn shift(key: Key) -> Self {
        Self::new(key, Modifiers::SHIFT)
    }

    pub fn ctrl(key: Key) -> Self {
        Self::new(key, Modifiers::CONTROL)
    }

    /// Expand a string into one plain character event per `char`.
    pub fn typed(text: &str) -> impl Iterator<Item = KeyEvent> + '_ {
        text.chars().map(KeyEvent::char)
    }

    /// The character this event would insert into a line, if any.
    ///
    /// Control codes and chords with Control or Alt never insert text.
    /// Control and Alt together is how Windows reports AltGr, so that pair
    /// does insert.
    pub fn printable(&self) -> Option<char> {
        let chord = self.modifiers.control != self.modifiers.alt;
        match self.key {
            Key::Char(c) if !c.is_control() && !chord => Some(c),
            _ => None,
        }
    }
}

impl From<CrosstermKeyEvent> for KeyEvent {
    fn from(event: CrosstermKeyEvent) -> Self {
        let mut modifiers = Modifiers::from(event.modifiers);
        let key = match event.code {
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            // Some terminals report Shift+Tab as its own code
            KeyCode::BackTab => {
                modifiers.shift = true;
                Key::Tab
            }
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Insert => Key::Insert,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Esc => Key::Escape,
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Unsupported,
        };

        Self { key, modifiers }
    }
}
