use super::Document;
use crate::error::{GridletError, Result};
use crate::storage::{PersistedState, from_json, parse_json, to_json, write_json};
use gridlet_engine::engine::Grid;
use std::path::{Path, PathBuf};

impl Document {
    /// Snapshot raw inputs and formats. Formulas are saved as their text.
    pub fn serialize(&self) -> PersistedState {
        PersistedState {
            grid: self.grid.inputs(),
            formats: self.formats.clone(),
        }
    }

    /// Replace grid and formats in one step, then recompute.
    ///
    /// On error the document is left unchanged. The selection is cleared
    /// since its coordinates may not exist in the new grid, and the document
    /// counts as unmodified afterwards.
    pub fn deserialize(&mut self, state: PersistedState) -> Result<()> {
        let grid = Grid::from_inputs(state.grid)
            .ok_or_else(|| GridletError::Format("grid must be non-empty and rectangular".into()))?;
        self.grid = grid;
        self.formats = state.formats;
        self.selection.clear();
        self.modified = false;
        let summary = self.recompute();
        tracing::debug!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            formulas = summary.formulas,
            "document replaced"
        );
        Ok(())
    }

    /// Serialize to JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        to_json(&self.serialize())
    }

    /// Replace the document from JSON bytes.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let state = from_json(bytes)?;
        self.deserialize(state)
    }

    /// Open a document from a JSON file.
    pub fn open(path: &Path) -> Result<Self> {
        let mut doc = Self::new();
        doc.load_file(path)?;
        Ok(doc)
    }

    /// Save to current file path.
    /// Returns the path saved to.
    pub fn save_file(&mut self) -> Result<PathBuf> {
        let Some(path) = self.file_path.clone() else {
            return Err(GridletError::NoFilePath);
        };
        write_json(&path, &self.serialize())?;
        self.modified = false;
        tracing::info!(path = %path.display(), "spreadsheet saved");
        Ok(path)
    }

    /// Save to a new path and remember it.
    pub fn save_file_as(&mut self, path: &Path) -> Result<PathBuf> {
        self.file_path = Some(path.to_path_buf());
        self.save_file()
    }

    /// Load from file
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let state = parse_json(path)?;
        self.deserialize(state)?;
        self.file_path = Some(path.to_path_buf());
        tracing::info!(path = %path.display(), "spreadsheet loaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlet_engine::engine::CellRef;
    use serde_json::json;

    fn cell(label: &str) -> CellRef {
        CellRef::decode(label).unwrap()
    }

    #[test]
    fn test_serialize_keeps_formula_text() {
        let mut doc = Document::with_size(3, 1).unwrap();
        doc.apply_edit(cell("A1"), "4");
        doc.insert_formula(cell("A3"), "SUM", "A1:A2").unwrap();
        let state = doc.serialize();
        assert_eq!(state.grid, vec![vec!["4"], vec![""], vec!["=SUM(A1:A2)"]]);
    }

    #[test]
    fn test_deserialize_recomputes() {
        let mut doc = Document::new();
        doc.toggle_selection(cell("J10"));
        doc.deserialize(PersistedState {
            grid: vec![vec!["1".into(), "2".into(), "=AVERAGE(A1:B1)".into()]],
            formats: json!({"C1": {"align": "right"}}),
        })
        .unwrap();
        assert_eq!((doc.rows(), doc.cols()), (1, 3));
        assert_eq!(doc.grid().display(cell("C1")).unwrap(), "1.5");
        assert_eq!(doc.formats["C1"], json!({"align": "right"}));
        assert!(doc.selection.is_empty());
    }

    #[test]
    fn test_load_bytes_clears_modified() {
        let mut doc = Document::new();
        doc.apply_edit(cell("A1"), "1");
        assert!(doc.modified);
        doc.load_bytes(br#"{"grid":[["2"]],"formats":{}}"#).unwrap();
        assert!(!doc.modified);
    }


    #[test]
    fn test_failed_load_leaves_document_unchanged() {
        let mut doc = Document::new();
        doc.apply_edit(cell("A1"), "1");
        let before = doc.grid().clone();
        assert!(matches!(
            doc.load_bytes(br#"{"grid":[["1"]]}"#),
            Err(GridletError::Format(_))
        ));
        assert!(doc.deserialize(PersistedState {
            grid: vec![vec!["1".into()], vec![]],
            formats: json!({}),
        })
        .is_err());
        assert_eq!(doc.grid(), &before);
    }

    #[test]
    fn test_save_without_path() {
        let mut doc = Document::new();
        assert!(matches!(doc.save_file(), Err(GridletError::NoFilePath)));
    }
}
