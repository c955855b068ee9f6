//! Configuration file management for sprout.
//!
//! Provides a TOML-based config file at `~/.config/sprout/config.toml`
//! holding the data file path, and a resolution chain:
//! CLI flag > env var > config file > default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Data file used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "plants.tsv";

/// Env var overriding the config file's data file path.
pub const DATA_FILE_ENV: &str = "SPROUT_FILE";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub storage: StorageSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StorageSection {
    pub data_file: String,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the sprout config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/sprout` or `~/.config/sprout`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("sprout");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("sprout")
}

/// Return the path to the sprout config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolution
// -----------------------------------------------------------------------

/// Resolve the data file using the chain:
/// `--file` flag > `SPROUT_FILE` env > config file > `plants.tsv`.
pub fn resolve_data_file(cli_file: Option<&Path>) -> PathBuf {
    if let Some(path) = cli_file {
        return path.to_path_buf();
    }
    if let Ok(path) = std::env::var(DATA_FILE_ENV) {
        return PathBuf::from(path);
    }
    if let Ok(cfg) = load_config() {
        return PathBuf::from(cfg.storage.data_file);
    }
    PathBuf::from(DEFAULT_DATA_FILE)
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
