//! Server configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! YAML file, and environment variables. The YAML file is read from
//! `CLOSET_CONFIG` if set, otherwise `closet_config.yaml` in the data directory.
//!
//! ```yaml
//! data_directory: /home/me/Documents/Digital Closet
//! bind_address: 127.0.0.1:3000
//! allowed_origin: http://localhost:8080
//! recommendation_limit: 3
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::domain::recommendation::DEFAULT_RECOMMENDATION_LIMIT;
use crate::backend::storage::JsonConnection;

pub const CONFIG_PATH_VAR: &str = "CLOSET_CONFIG";
pub const DATA_DIR_VAR: &str = "CLOSET_DATA_DIR";
pub const BIND_ADDR_VAR: &str = "CLOSET_BIND_ADDR";
pub const RECOMMENDATION_LIMIT_VAR: &str = "CLOSET_RECOMMENDATION_LIMIT";

pub const CONFIG_FILE_NAME: &str = "closet_config.yaml";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_directory: PathBuf,
    pub bind_address: String,
    /// `None` allows any origin
    pub allowed_origin: Option<String>,
    pub recommendation_limit: usize,
}

/// On-disk shape: every key optional
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    data_directory: Option<PathBuf>,
    bind_address: Option<String>,
    allowed_origin: Option<String>,
    recommendation_limit: Option<usize>,
}

impl AppConfig {
    /// Defaults for everything except the data directory
    pub fn with_data_directory<P: AsRef<Path>>(data_directory: P) -> Self {
        Self {
            data_directory: data_directory.as_ref().to_path_buf(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            allowed_origin: Some(DEFAULT_ALLOWED_ORIGIN.to_string()),
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }

    /// Load from the process environment
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` for environment variables
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_data_dir = lookup(DATA_DIR_VAR).map(PathBuf::from);

        let config_path = match (lookup(CONFIG_PATH_VAR), &env_data_dir) {
            (Some(path), _) => PathBuf::from(path),
            (None, Some(dir)) => dir.join(CONFIG_FILE_NAME),
            (None, None) => JsonConnection::default_directory()?.join(CONFIG_FILE_NAME),
        };
        let file = Self::read_file(&config_path)?;

        let data_directory = match env_data_dir.or(file.data_directory) {
            Some(dir) => dir,
            None => JsonConnection::default_directory()?,
        };
        let mut config = Self::with_data_directory(data_directory);
        if let Some(bind_address) = file.bind_address {
            config.bind_address = bind_address;
        }
        if file.allowed_origin.is_some() {
            config.allowed_origin = file.allowed_origin;
        }
        if let Some(limit) = file.recommendation_limit {
            config.recommendation_limit = limit;
        }

        if let Some(bind_address) = lookup(BIND_ADDR_VAR) {
            config.bind_address = bind_address;
        }
        if let Some(limit) = lookup(RECOMMENDATION_LIMIT_VAR) {
            config.recommendation_limit = limit.trim().parse().with_context(|| {
                format!("{} must be a non-negative integer, got '{}'", RECOMMENDATION_LIMIT_VAR, limit)
            })?;
        }

        info!("⚙️ Configuration: {:?}", config);
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(ConfigFile::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}
