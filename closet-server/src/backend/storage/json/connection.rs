use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::storage::traits::{ClosetStorage, StoreKey};

pub const DEFAULT_DIRECTORY_NAME: &str = "Digital Closet";

/// JsonConnection keeps one JSON file per store key inside a data directory
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new JSON connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
            info!("📁 Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Default data directory: ~/Documents/Digital Closet (home directory if there is no Documents)
    pub fn default_directory() -> Result<PathBuf> {
        let parent = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(parent.join(DEFAULT_DIRECTORY_NAME))
    }

    pub fn file_path(&self, key: StoreKey) -> PathBuf {
        self.base_directory.join(format!("{}.json", key.name()))
    }
}

impl ClosetStorage for JsonConnection {
    fn read(&self, key: StoreKey) -> Result<Option<String>> {
        let path = self.file_path(key);
        if !path.exists() {
            debug!("No stored data at {}", path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(contents))
    }

    fn write(&self, key: StoreKey, contents: &str) -> Result<()> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
        }

        // Atomic write using temp file
        let path = self.file_path(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Saved {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }
}
