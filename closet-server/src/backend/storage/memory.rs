//! In-memory storage backend with read and write failure injection, for tests
//! and throwaway sessions.

use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};

use super::traits::{ClosetStorage, StoreKey};

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<StoreKey, String>>>,
    failing_keys: Arc<Mutex<HashSet<StoreKey>>>,
    unreadable_keys: Arc<Mutex<HashSet<StoreKey>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a stored document, as if written by an earlier session
    pub fn with_contents(self, key: StoreKey, contents: &str) -> Self {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, contents.to_string());
        self
    }

    pub fn contents(&self, key: StoreKey) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    /// Make every write to `key` fail until switched off again
    pub fn fail_writes(&self, key: StoreKey, failing: bool) {
        let mut failing_keys = self
            .failing_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if failing {
            failing_keys.insert(key);
        } else {
            failing_keys.remove(&key);
        }
    }

    /// Make every read of `key` fail until switched off again
    pub fn fail_reads(&self, key: StoreKey, failing: bool) {
        let mut unreadable_keys = self
            .unreadable_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if failing {
            unreadable_keys.insert(key);
        } else {
            unreadable_keys.remove(&key);
        }
    }
}

impl ClosetStorage for MemoryStorage {
    fn read(&self, key: StoreKey) -> Result<Option<String>> {
        let unreadable = self
            .unreadable_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&key);
        if unreadable {
            return Err(anyhow::anyhow!("Simulated read failure for {}", key.name()));
        }
        Ok(self.contents(key))
    }

    fn write(&self, key: StoreKey, contents: &str) -> Result<()> {
        let failing = self
            .failing_keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&key);
        if failing {
            return Err(anyhow::anyhow!("Simulated write failure for {}", key.name()));
        }

        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_injection() {
        let storage = MemoryStorage::new();
        storage.write(StoreKey::Wardrobe, "[]").unwrap();

        storage.fail_writes(StoreKey::Wardrobe, true);
        assert!(storage.write(StoreKey::Wardrobe, "[1]").is_err());
        assert!(storage.write(StoreKey::Outfits, "{}").is_ok());
        assert_eq!(storage.contents(StoreKey::Wardrobe).as_deref(), Some("[]"));

        storage.fail_writes(StoreKey::Wardrobe, false);
        storage.write(StoreKey::Wardrobe, "[1]").unwrap();
        assert_eq!(storage.read(StoreKey::Wardrobe).unwrap().as_deref(), Some("[1]"));

        storage.fail_reads(StoreKey::Wardrobe, true);
        assert!(storage.read(StoreKey::Wardrobe).is_err());
        assert_eq!(storage.contents(StoreKey::Wardrobe).as_deref(), Some("[1]"));
    }
}
