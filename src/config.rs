use crate::error::{DraftpadError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SAVE_DELAY_MS: u64 = 3000;

/// Configuration for draftpad, stored as config.json in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DraftpadConfig {
    /// Pause applied to every save, standing in for the real backend round
    /// trip.
    #[serde(default = "default_save_delay_ms")]
    pub save_delay_ms: u64,
}

fn default_save_delay_ms() -> u64 {
    DEFAULT_SAVE_DELAY_MS
}

impl Default for DraftpadConfig {
    fn default() -> Self {
        Self {
            save_delay_ms: DEFAULT_SAVE_DELAY_MS,
        }
    }
}

impl DraftpadConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DraftpadError::Io)?;
        let config: DraftpadConfig =
            serde_json::from_str(&content).map_err(DraftpadError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DraftpadError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DraftpadError::Serialization)?;
        fs::write(config_path, content).map_err(DraftpadError::Io)?;
        Ok(())
    }

    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms)
    }
}

/// Default data directory for the storage backend and config.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "draftpad")
        .ok_or_else(|| DraftpadError::Storage("could not determine a data directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}
