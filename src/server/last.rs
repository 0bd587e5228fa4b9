use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::ServerError;
use crate::config::APP_DIR_NAME;

const STATE_FILE_NAME: &str = "last-launch.json";

/// The most recent debug-server launch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastLaunchInfo {
    pub executable: PathBuf,
    pub address: String,
    pub port: u16,
    pub pid: u32,
    pub started_at: DateTime<Utc>,
}

/// On-disk holder of the single [`LastLaunchInfo`]. Written once per
/// successful launch, read by later commands.
#[derive(Debug, Clone)]
pub struct LastLaunchStore {
    path: PathBuf,
}

impl LastLaunchStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `<local data dir>/bsl-extmap/last-launch.json`
    pub fn default_location() -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR_NAME).join(STATE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self, info: &LastLaunchInfo) -> Result<(), ServerError> {
        let json = serde_json::to_vec_pretty(info).map_err(|source| ServerError::Encode {
            path: self.path.clone(),
            source,
        })?;
        self.atomic_write(&json).map_err(|source| ServerError::State {
            path: self.path.clone(),
            source,
        })
    }

    /// `Ok(None)` when nothing has been launched yet
    pub fn load(&self) -> Result<Option<LastLaunchInfo>, ServerError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read(&self.path).map_err(|source| ServerError::State {
            path: self.path.clone(),
            source,
        })?;
        let info = serde_json::from_slice(&content).map_err(|source| ServerError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(info))
    }

    fn atomic_write(&self, data: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, data)?;
        fs::rename(temp_path, &self.path)
    }
}
