//! Integration tests for config loading

use gridlet::{Config, load_config};

#[test]
fn test_explicit_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "rows = 4\ncols = 2\n").unwrap();

    let (config, warnings) = load_config(Some(&path));
    assert!(warnings.is_empty());
    assert_eq!(config, Config { rows: 4, cols: 2 });

    let doc = config.new_document().unwrap();
    assert_eq!((doc.rows(), doc.cols()), (4, 2));
}

#[test]
fn test_missing_explicit_file_warns() {
    let dir = tempfile::tempdir().unwrap();
    let (config, warnings) = load_config(Some(&dir.path().join("nope.toml")));
    assert_eq!(config, Config::default());
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "rows = \"many\"").unwrap();

    let (config, warnings) = load_config(Some(&path));
    assert_eq!(config, Config::default());
    assert!(warnings[0].contains("Failed to load"));
}
