//! User configuration.
//!
//! Read from `config.toml` in the platform config directory, e.g.
//!
//! ```toml
//! rows = 20
//! cols = 8
//! ```
//!
//! Missing keys keep their defaults. A missing, unreadable or invalid file
//! never fails loading: the defaults are used and a warning is returned.

use crate::error::{ConfigError, Result};
use directories::ProjectDirs;
use gridlet_core::document::{DEFAULT_COLS, DEFAULT_ROWS};
use gridlet_core::{Document, GridletError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

/// Settings for new documents.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Rows in a new grid
    pub rows: usize,
    /// Columns in a new grid
    pub cols: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl Config {
    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        if config.rows == 0 || config.cols == 0 {
            return Err(ConfigError::InvalidSize {
                rows: config.rows,
                cols: config.cols,
            });
        }
        Ok(config)
    }

    /// Read a config file, refusing oversized files.
    pub fn from_file(path: &Path) -> Result<Config> {
        let size = std::fs::metadata(path)?.len();
        if size > MAX_CONFIG_FILE_BYTES {
            return Err(ConfigError::TooLarge {
                size,
                max: MAX_CONFIG_FILE_BYTES,
            });
        }
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// An empty document of the configured size.
    pub fn new_document(&self) -> std::result::Result<Document, GridletError> {
        Document::with_size(self.rows, self.cols)
    }
}

/// Default location of `config.toml`, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("me", "shoryuken", "gridlet")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Load configuration from `path`, or the user config when `None`.
///
/// Returns the config plus any warnings; problems fall back to defaults.
pub fn load_config(path: Option<&Path>) -> (Config, Vec<String>) {
    let mut warnings = Vec::new();
    let explicit = path.is_some();
    let Some(path) = path.map(Path::to_path_buf).or_else(user_config_path) else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if explicit {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    match Config::from_file(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), rows = config.rows, cols = config.cols, "config loaded");
            (config, warnings)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "config ignored");
            warnings.push(format!("Failed to load {}: {}", path.display(), err));
            (Config::default(), warnings)
        }
    }
}
