//! Error types for the sheetgrid command line

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running the sheetgrid CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Refusing to read {}: file too large ({size} bytes, max {max})", .path.display())]
    ConfigTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
