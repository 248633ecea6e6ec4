use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the face-recognition backend.
    pub api_base_url: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Rows shown in the "recent activity" dashboard card.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    /// Where exported spreadsheets land.
    pub export_dir: String,
}

fn default_timeout() -> u64 {
    10
}

fn default_recent_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: default_timeout(),
            recent_limit: default_recent_limit(),
            export_dir: env::temp_dir().to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Standard configuration directory, per platform.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("absensi-portal")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("portal.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &PathBuf) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse {}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &PathBuf) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(path, content)?;
        Ok(())
    }
}
