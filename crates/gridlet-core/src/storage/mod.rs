//! Storage formats.

mod json;

pub use json::{Formats, PersistedState, from_json, parse_json, to_json, write_json};
