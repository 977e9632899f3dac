//! Document state and logic (UI-agnostic).

mod clipboard;
mod io;
mod ops;
mod state;

pub use clipboard::{Clipboard, ClipboardEntry, Selection};
pub use ops::{formula_text, is_literal};
pub use state::{DEFAULT_COLS, DEFAULT_ROWS, Document};
