//! Unified path management for AMHP files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/amhp/              # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/amhp/         # Data directory
//! ├── settings.json            # One JSON file per store key
//! ├── mood-data.json
//! ├── chat-history.json
//! ├── journal-entries.json
//! ├── current-user.json
//! └── logs/                    # Application logs
//!     └── amhp.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "amhp";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for amhp_core::AmhpError {
    fn from(err: PathError) -> Self {
        amhp_core::AmhpError::config(err.to_string())
    }
}

/// Resolves AMHP directories, honoring an optional data directory override.
#[derive(Debug, Clone, Default)]
pub struct AmhpPaths {
    data_override: Option<PathBuf>,
}

impl AmhpPaths {
    pub fn new(data_override: Option<PathBuf>) -> Self {
        Self { data_override }
    }

    /// Returns the platform configuration directory (e.g. `~/.config/amhp/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory holding persisted records.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(dir) = &self.data_override {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("logs"))
    }
}
