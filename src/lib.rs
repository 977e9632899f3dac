//! gridlet - Grid data model with SUM/AVERAGE formulas.
//!
//! The computation lives in [`gridlet_engine`], the document model and
//! storage in [`gridlet_core`]. This crate re-exports both and adds user
//! configuration for new documents.
//!
//! ```
//! use gridlet::{CellRef, Document};
//!
//! let mut doc = Document::new();
//! let a1 = CellRef::decode("A1").unwrap();
//! doc.apply_edit(a1, "3");
//! doc.apply_edit(CellRef::decode("A2").unwrap(), "4");
//! doc.insert_formula(CellRef::decode("A3").unwrap(), "SUM", "A1:A2").unwrap();
//! assert_eq!(doc.grid().display(CellRef::decode("A3").unwrap()).unwrap(), "7");
//! ```

pub mod config;
pub mod error;

pub use config::{Config, load_config};
pub use error::ConfigError;

pub use gridlet_core::{
    Clipboard, ClipboardEntry, Document, Formats, GridletError, PersistedState, Selection,
};
pub use gridlet_engine::EvalError;
pub use gridlet_engine::engine::{CellRange, CellRef, Function, Grid};
