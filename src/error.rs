//! Error types for Gridlet configuration.

use thiserror::Error;

/// Errors raised while reading a config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Refusing to read config: file too large ({size} bytes, max {max})")]
    TooLarge { size: u64, max: u64 },

    #[error("Grid size must be at least 1x1, got {rows}x{cols}")]
    InvalidSize { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
