//! entryline UI Library - shell-style line editing
//!
//! Turns a stream of raw key events into an edited, submittable command string
//! while drawing directly onto a terminal it shares with other output. The
//! logical line may be longer than the terminal is wide; [`LineGeometry`] maps
//! buffer indices to wrapped screen cells and back.

pub mod buffer;
pub mod completion;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod error;
pub mod history;

pub use buffer::{BufferFull, EditBuffer, MAX_LEN};
pub use completion::{Completer, CompletionCycler, CycleDirection, WordListCompleter};
pub use config::EditorConfig;
pub use cursor::LineGeometry;
pub use editor::{InputMode, LineEditor};
pub use error::{EditorError, EditorResult};
pub use history::HistoryLog;

pub use entryline_hal::{Key, KeyEvent, Modifiers, Terminal};
