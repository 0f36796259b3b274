use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Minimum file size as a human-readable string
    pub min_size: String,
    /// Number of largest files to display
    pub top: usize,
    /// Additional directories to exclude from every scan
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_size: "50MB".to_string(),
            top: 20,
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicitly given path must be readable and parsable; the default
    /// location is optional and silently falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(Self::default()),
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&contents)
            .map_err(|source| ConfigError::ParseError { path, source })?;
        Ok(config)
    }

    /// `<config_dir>/drive-sift/config.toml`, if the platform has a config
    /// directory at all.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("drive-sift").join("config.toml"))
    }
}
