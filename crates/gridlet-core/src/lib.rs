//! gridlet-core - UI-agnostic document model + storage.

pub mod document;
pub mod error;
pub mod storage;

pub use document::{Clipboard, ClipboardEntry, Document, Selection};
pub use error::{GridletError, Result};
pub use storage::{Formats, PersistedState};

pub use gridlet_engine::engine::CellRef;
