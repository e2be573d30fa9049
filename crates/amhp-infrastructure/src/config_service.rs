//! Configuration service.
//!
//! Loads [`AppConfig`] from `config.toml`, writing the defaults on first run.

use std::path::{Path, PathBuf};

use amhp_core::config::AppConfig;
use amhp_core::error::{AmhpError, Result};

use crate::paths::AmhpPaths;
use crate::storage::AtomicFile;

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses the platform config file (`~/.config/amhp/config.toml`).
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::new(AmhpPaths::config_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the configuration, creating the file with defaults if missing.
    pub fn load(&self) -> Result<AppConfig> {
        let file = AtomicFile::<AppConfig>::toml(self.path.clone());
        match file.load() {
            Ok(Some(config)) => Ok(config),
            Ok(None) => {
                let config = AppConfig::default();
                file.save(&config)?;
                tracing::info!(path = %self.path.display(), "Wrote default configuration");
                Ok(config)
            }
            Err(e) => Err(AmhpError::config(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    /// Like [`load`](Self::load) but falls back to defaults on any error.
    pub fn load_or_default(&self) -> AppConfig {
        self.load().unwrap_or_else(|e| {
            tracing::warn!("Using default configuration: {}", e);
            AppConfig::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let service = ConfigService::new(&path);

        let config = service.load().unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_reads_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "seed = 42\n[chat]\nsuppress_replies_off_chat = true\n").unwrap();

        let config = ConfigService::new(&path).load().unwrap();

        assert_eq!(config.seed, Some(42));
        assert!(config.chat.suppress_replies_off_chat);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "seed = \"not a number\"").unwrap();
        let service = ConfigService::new(&path);

        assert!(matches!(service.load(), Err(AmhpError::Config(_))));
        assert_eq!(service.load_or_default(), AppConfig::default());
    }
}
