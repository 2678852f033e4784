//! Application configuration
//!
//! Loaded from `<config dir>/lexicon/config.toml` unless a path is given.
//! A missing file means defaults. `LEXICON_DATA_DIR` overrides `data_dir`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vocabulary::storage::DEFAULT_FILE_NAME;
use crate::vocabulary::{JsonWordStore, MemoryWordStore, StoreError, WordStore};

const APP_DIR: &str = "lexicon";
const CONFIG_FILE: &str = "config.toml";
const DATA_DIR_ENV: &str = "LEXICON_DATA_DIR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory not found")]
    ConfigDirNotFound,

    #[error("Invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Which word store backend to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Json,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Json,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where word data lives (default: `<local data dir>/lexicon`)
    pub data_dir: Option<PathBuf>,
    pub storage: StorageConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Default config file location
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR).join(CONFIG_FILE))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Load from `path`, or from the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        let mut config = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            let config = Self::from_toml(&content).map_err(|source| ConfigError::Toml {
                path: path.clone(),
                source,
            })?;
            log::debug!("Loaded config from {:?}", path);
            config
        } else {
            log::debug!("No config at {:?}, using defaults", path);
            Self::default()
        };

        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let file_name = self.storage.file_name.trim();
        if file_name.is_empty() || file_name.contains(&['/', '\\'][..]) {
            return Err(ConfigError::Invalid {
                field: "storage.file_name",
                message: format!("'{}' must be a plain file name", self.storage.file_name),
            });
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "server.host",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Resolved data directory
    pub fn data_dir(&self) -> Result<PathBuf, StoreError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_local_dir()
                .map(|p| p.join(APP_DIR))
                .ok_or(StoreError::DataDirNotFound),
        }
    }

    /// Open the configured word store
    pub fn open_store(&self) -> Result<Arc<dyn WordStore>, StoreError> {
        match self.storage.backend {
            StorageBackend::Memory => {
                log::warn!("Using in-memory word store, changes will not be saved");
                Ok(Arc::new(MemoryWordStore::new()))
            }
            StorageBackend::Json => {
                let path = self.data_dir()?.join(&self.storage.file_name);
                Ok(Arc::new(JsonWordStore::open(path)?))
            }
        }
    }
}
