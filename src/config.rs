//! Sheet configuration loading.
//!
//! A TOML file holding a [`SheetConfig`] is read from `--config <FILE>` or,
//! when no path is given, from `sheet.toml` in the user's config directory if
//! one exists there.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use sheetgrid_core::SheetConfig;

use crate::error::{CliError, Result};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

/// `<config_dir>/sheet.toml` for this user, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "sheetgrid")?;
    Some(proj.config_dir().join("sheet.toml"))
}

/// Load the sheet config. An explicit path must exist; the default path is
/// only used when present. Falls back to [`SheetConfig::default`].
pub fn load_config(explicit: Option<&Path>) -> Result<SheetConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => path,
            None => return Ok(SheetConfig::default()),
        },
    };
    read_config(&path)
}

fn read_config(path: &Path) -> Result<SheetConfig> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_CONFIG_FILE_BYTES {
        return Err(CliError::ConfigTooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_CONFIG_FILE_BYTES,
        });
    }
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    log::debug!("loaded sheet config from {}", path.display());
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<SheetConfig> {
    Ok(toml::from_str::<SheetConfig>(content)?)
}
