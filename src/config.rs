//! Configuration for the debug-server collaborators.
//!
//! Looked up in order: an explicit path, `./bsl-extmap.toml`, then
//! `<config dir>/bsl-extmap/config.toml`. Missing files fall back to defaults.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "bsl-extmap.toml";
pub const APP_DIR_NAME: &str = "bsl-extmap";

pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT_START: u16 = 1560;
pub const DEFAULT_PORT_END: u16 = 1591;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub debug_server: DebugServerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugServerConfig {
    /// Root holding versioned platform directories, e.g. `C:\Program Files\1cv8`
    pub install_root: Option<PathBuf>,
    /// Explicit debug-server executable; skips the install search
    pub executable: Option<PathBuf>,
    pub address: String,
    pub port_start: u16,
    pub port_end: u16,
}

impl Default for DebugServerConfig {
    fn default() -> Self {
        Self {
            install_root: None,
            executable: None,
            address: DEFAULT_ADDRESS.to_string(),
            port_start: DEFAULT_PORT_START,
            port_end: DEFAULT_PORT_END,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from `explicit` when given, otherwise the first existing default location
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for candidate in default_locations() {
            if candidate.is_file() {
                debug!("loading config from {}", candidate.display());
                return Self::from_file(&candidate);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }
}

fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join(APP_DIR_NAME).join("config.toml"));
    }
    locations
}
