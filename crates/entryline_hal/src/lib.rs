//! entryline Hardware Abstraction Layer (HAL)
//!
//! This crate isolates everything the line editor needs from a character-cell
//! terminal behind the [`Terminal`] capability trait:
//! - Reading key events as a closed [`Key`] variant type
//! - Reading and moving the hardware cursor
//! - Writing colored text, hiding and showing the cursor
//! - Reporting the window width
//!
//! Two implementations ship with the crate: [`CrosstermTerminal`] for real
//! terminals and [`VirtualTerminal`], an in-memory screen for deterministic tests.

pub mod crossterm_terminal;
pub mod error;
pub mod key;
pub mod terminal;
pub mod virtual_terminal;

pub use crossterm_terminal::CrosstermTerminal;
pub use error::{HalError, HalResult};
pub use key::{Key, KeyEvent, Modifiers};
pub use terminal::{ConsoleColor, CursorPosition, Terminal, TextColors};
pub use virtual_terminal::VirtualTerminal;
