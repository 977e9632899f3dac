//! End-to-end document behavior: edits, clipboard and persistence.

use gridlet_core::{CellRef, Document, GridletError};

fn cell(label: &str) -> CellRef {
    CellRef::decode(label).unwrap()
}

fn sample() -> Document {
    let mut doc = Document::with_size(4, 3).unwrap();
    doc.apply_edit(cell("A1"), "1.5");
    doc.apply_edit(cell("A2"), "-2");
    doc.apply_edit(cell("B1"), "10");
    doc.insert_formula(cell("C1"), "sum", "A1:B2").unwrap();
    doc.insert_formula(cell("C2"), "AVERAGE", "A1:A2").unwrap();
    doc.insert_formula(cell("C3"), "MEDIAN", "A1:A2").unwrap();
    doc.add_row();
    doc.add_column();
    doc.formats["A1"] = serde_json::json!({"bold": true});
    doc
}

#[test]
fn test_computed_values() {
    let doc = sample();
    assert_eq!(doc.grid().display(cell("C1")).unwrap(), "9.5");
    assert_eq!(doc.grid().display(cell("C2")).unwrap(), "-0.25");
    assert_eq!(doc.grid().display(cell("C3")).unwrap(), "Error");
}

#[test]
fn test_round_trip_through_state() {
    let doc = sample();
    let mut restored = Document::new();
    restored.deserialize(doc.serialize()).unwrap();
    assert_eq!(restored.grid(), doc.grid());
    assert_eq!(restored.formats, doc.formats);
}

#[test]
fn test_round_trip_through_bytes() {
    let doc = sample();
    let mut restored = Document::new();
    restored.load_bytes(&doc.to_bytes().unwrap()).unwrap();
    assert_eq!(restored.grid(), doc.grid());
    assert_eq!(restored.formats, doc.formats);
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.json");

    let mut doc = sample();
    assert_eq!(doc.save_file_as(&path).unwrap(), path);
    assert!(!doc.modified);

    let reopened = Document::open(&path).unwrap();
    assert_eq!(reopened.grid(), doc.grid());
    assert_eq!(reopened.formats, doc.formats);
    assert_eq!(reopened.file_path.as_deref(), Some(path.as_path()));
    assert!(!reopened.modified);
}

#[test]
fn test_load_legacy_numeric_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.json");
    std::fs::write(&path, r#"{"grid":[["3","4",7]],"formats":{}}"#).unwrap();

    let doc = Document::open(&path).unwrap();
    assert_eq!(doc.grid().raw(cell("C1")), Some("7"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Document::open(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, GridletError::Io(_)));
}

#[test]
fn test_load_missing_formats_is_format_error() {
    let mut doc = Document::new();
    let err = doc.load_bytes(br#"{"grid":[["1"]]}"#).unwrap_err();
    assert!(matches!(err, GridletError::Format(_)));
}

#[test]
fn test_paste_at_offset() {
    let mut doc = sample();
    doc.toggle_selection(cell("B1"));
    doc.copy();
    assert_eq!(doc.paste_at(cell("D4")), 1);
    assert_eq!(doc.grid().raw(cell("D4")), Some("10"));
    assert_eq!(doc.grid().raw(cell("B1")), Some("10"));
}

#[test]
fn test_paste_then_recompute_sees_new_value() {
    let mut doc = Document::with_size(3, 2).unwrap();
    doc.apply_edit(cell("A1"), "6");
    doc.insert_formula(cell("B1"), "SUM", "A2:A3").unwrap();
    doc.toggle_selection(cell("A1"));
    doc.copy();
    doc.paste_at(cell("A3"));
    assert_eq!(doc.grid().display(cell("B1")).unwrap(), "6");
}

#[test]
fn test_recompute_twice_is_stable() {
    let mut doc = sample();
    let first = doc.recompute();
    let snapshot = doc.grid().clone();
    let second = doc.recompute();
    assert_eq!(first, second);
    assert_eq!(doc.grid(), &snapshot);
}

#[test]
fn test_zero_sized_document_rejected() {
    assert!(matches!(
        Document::with_size(0, 4),
        Err(GridletError::InvalidDimensions)
    ));
}

#[test]
fn test_rejected_edit_keeps_formulas_consistent() {
    let mut doc = Document::with_size(1, 2).unwrap();
    doc.apply_edit(cell("A1"), "3");
    doc.insert_formula(cell("B1"), "SUM", "A1:A1").unwrap();

    assert!(!doc.apply_edit(cell("A1"), "abc"));
    assert_eq!(doc.grid().raw(cell("A1")), Some("3"));
    assert_eq!(doc.grid().display(cell("B1")).unwrap(), "3");

    assert!(doc.apply_edit(cell("A1"), ""));
    assert_eq!(doc.grid().display(cell("B1")).unwrap(), "0");
}

#[test]
fn test_formats_pass_through_unchanged() {
    let mut doc = Document::new();
    doc.load_bytes(br#"{"grid":[["1"]],"formats":null}"#).unwrap();
    assert!(doc.formats.is_null());

    doc.load_bytes(br#"{"grid":[["1"]],"formats":["wide",{"A1":"bold"}]}"#)
        .unwrap();
    let bytes = doc.to_bytes().unwrap();
    let mut restored = Document::new();
    restored.load_bytes(&bytes).unwrap();
    assert_eq!(restored.formats, serde_json::json!(["wide", {"A1": "bold"}]));
}
