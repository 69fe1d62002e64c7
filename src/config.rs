//! Configuration file support for findtier
//!
//! Reads preset manifests from `~/.config/findtier/config.json`:
//!
//! ```json
//! {
//!   "presets": {
//!     "node": ["package.json", ["yarn.lock", "pnpm-lock.yaml"]],
//!     "rust": ["Cargo.toml"]
//!   }
//! }
//! ```

use crate::manifest::{PriorityManifest, SearchKey};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot determine config directory. HOME environment variable not set.")]
    NoConfigDir,

    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Unknown preset '{name}'. Add it to the presets table in the config file.")]
    UnknownPreset { name: String },
}

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Named manifests: { "preset": ["file", ["alt-a", "alt-b"]] }
    #[serde(default)]
    pub presets: HashMap<String, PriorityManifest>,
}

impl Config {
    /// Load configuration from the default path or return defaults if not found
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::ParseError { path, source })
    }

    /// Look up a named preset manifest
    pub fn preset(&self, name: &str) -> Result<&[SearchKey], ConfigError> {
        self.presets
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ConfigError::UnknownPreset {
                name: name.to_string(),
            })
    }
}

/// Returns the config file path: `~/.config/findtier/config.json`
pub fn config_path() -> Result<PathBuf, ConfigError> {
    // Use XDG_CONFIG_HOME if set, otherwise fall back to ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(".config"))
                .unwrap_or_default()
        });

    if config_base.as_os_str().is_empty() {
        return Err(ConfigError::NoConfigDir);
    }

    Ok(config_base.join("findtier").join("config.json"))
}
