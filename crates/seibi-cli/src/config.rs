//! Configuration loading for the CLI
//!
//! Reads an optional config.toml from the user config directory; CLI
//! flags override file values, file values override defaults.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use seibi_types::{ConfigError, Error, Result};

const APP_DIR: &str = "seibi-planner";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory holding history.json and vehicles.toml
    store_dir: Option<PathBuf>,
    /// Registry path, when kept outside the store directory
    registry_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the user config directory, if present
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(ConfigError::ParseError(e.to_string())))
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Resolve the store directory: config value, else user data dir
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.store_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join(APP_DIR))
            .ok_or_else(|| Error::Config(ConfigError::NotFound))
    }

    /// Resolve the registry path: config value, else vehicles.toml in the
    /// store directory
    pub fn registry_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.registry_path {
            return Ok(path.clone());
        }
        Ok(self.store_dir()?.join("vehicles.toml"))
    }

    /// Apply CLI overrides on top of the loaded configuration
    pub fn with_overrides(
        mut self,
        store_dir: Option<PathBuf>,
        registry_path: Option<PathBuf>,
    ) -> Self {
        if store_dir.is_some() {
            self.store_dir = store_dir;
        }
        if registry_path.is_some() {
            self.registry_path = registry_path;
        }
        self
    }
}
