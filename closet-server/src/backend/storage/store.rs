//! # Persistent Store
//!
//! Typed load/save over a `ClosetStorage` backend.
//!
//! Loading never fails: a missing document, unreadable storage or malformed
//! JSON all mean "no prior state" and yield the empty collection. Item records
//! without an id or a name are skipped. Saving reports failures so the caller
//! can roll back.

use anyhow::Result;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{ClothingItem as SharedItem, StoredItemId};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use super::traits::{ClosetStorage, StoreKey};
use crate::backend::domain::models::{OutfitLedger, Wardrobe};
use crate::backend::io::rest::mappers::item_mapper::ItemMapper;
use crate::backend::io::rest::mappers::outfit_mapper::OutfitMapper;

#[derive(Clone)]
pub struct PersistentStore {
    backend: Arc<dyn ClosetStorage>,
}

impl PersistentStore {
    pub fn new(backend: Arc<dyn ClosetStorage>) -> Self {
        Self { backend }
    }

    /// Load a collection, falling back to its default on any problem
    pub fn load<T: DeserializeOwned + Default>(&self, key: StoreKey) -> T {
        let contents = match self.backend.read(key) {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!("No stored {} yet, starting empty", key.name());
                return T::default();
            }
            Err(e) => {
                warn!("⚠️ Could not read {}: {:#}. Starting empty.", key.name(), e);
                return T::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(e) => {
                warn!("⚠️ Stored {} is corrupt ({}). Treating it as empty.", key.name(), e);
                T::default()
            }
        }
    }

    /// Serialize and durably write a collection
    pub fn save<T: Serialize>(&self, key: StoreKey, value: &T) -> Result<()> {
        let contents = serde_json::to_string_pretty(value)?;
        self.backend.write(key, &contents)
    }

    /// Load the wardrobe. Unmappable records and repeated ids are skipped.
    pub fn load_wardrobe(&self) -> Wardrobe {
        let records: Vec<serde_json::Value> = self.load(StoreKey::Wardrobe);
        let mut seen_ids = HashSet::new();
        let mut items = Vec::with_capacity(records.len());

        for record in records {
            let item = serde_json::from_value::<SharedItem>(record)
                .map_err(anyhow::Error::from)
                .and_then(ItemMapper::to_domain);
            match item {
                Ok(item) if !seen_ids.insert(item.id.clone()) => {
                    warn!("⚠️ Skipping item with repeated id: {}", item.id);
                }
                Ok(item) => items.push(item),
                Err(e) => warn!("⚠️ Skipping unreadable item record: {:#}", e),
            }
        }

        info!("👕 Loaded {} wardrobe items", items.len());
        Wardrobe::new(items)
    }

    pub fn load_outfits(&self) -> OutfitLedger {
        let stored: BTreeMap<String, Vec<StoredItemId>> = self.load(StoreKey::Outfits);
        let ledger = OutfitMapper::to_domain(stored);
        info!("🗓️ Loaded outfits for {} dates", ledger.assigned_dates().count());
        ledger
    }

    pub fn save_wardrobe(&self, wardrobe: &Wardrobe) -> Result<()> {
        let records: Vec<SharedItem> = wardrobe.items().iter().map(ItemMapper::to_dto).collect();
        self.save(StoreKey::Wardrobe, &records)
    }

    pub fn save_outfits(&self, ledger: &OutfitLedger) -> Result<()> {
        self.save(StoreKey::Outfits, &OutfitMapper::to_stored(ledger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::MemoryStorage;
    use crate::backend::storage::JsonConnection;
    use tempfile::TempDir;

    fn store_with(storage: &MemoryStorage) -> PersistentStore {
        PersistentStore::new(Arc::new(storage.clone()))
    }

    #[test]
    fn test_missing_documents_load_empty() {
        let store = store_with(&MemoryStorage::new());
        assert!(store.load_wardrobe().is_empty());
        assert!(store.load_outfits().is_empty());
    }

    #[test]
    fn test_corrupt_documents_load_empty() {
        let storage = MemoryStorage::new()
            .with_contents(StoreKey::Wardrobe, "[{\"id\": ")
            .with_contents(StoreKey::Outfits, "not json at all");
        let store = store_with(&storage);

        assert!(store.load_wardrobe().is_empty());
        assert!(store.load_outfits().is_empty());
    }

    #[test]
    fn test_unreadable_documents_load_empty() {
        let storage = MemoryStorage::new().with_contents(StoreKey::Outfits, r#"{"2024-06-01": [1]}"#);
        storage.fail_reads(StoreKey::Outfits, true);
        let store = store_with(&storage);

        assert!(store.load_outfits().is_empty());
        assert!(storage.contents(StoreKey::Outfits).is_some());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let storage = MemoryStorage::new()
            .with_contents(StoreKey::Wardrobe, r#"{"not": "a list"}"#)
            .with_contents(StoreKey::Outfits, r#"["not", "a", "map"]"#);
        let store = store_with(&storage);

        assert!(store.load_wardrobe().is_empty());
        assert!(store.load_outfits().is_empty());
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let storage = MemoryStorage::new().with_contents(
            StoreKey::Wardrobe,
            r#"[
                {"id": 1, "name": "白いTシャツ", "category": "tops", "date": "2024-01-01"},
                {"id": 2, "name": "", "category": "tops", "date": "2024-01-01"},
                {"id": 3, "category": "tops"},
                {"id": 1, "name": "duplicate", "category": "tops", "date": "2024-01-05"},
                {"id": "item::x", "name": "帯", "category": "kimono", "addedDate": "2024-02-01T00:00:00Z"},
                {"id": 4, "name": "スニーカー", "category": "shoes", "date": ""},
                {"id": 5, "name": "マフラー", "category": "accessory", "date": "not a date"}
            ]"#,
        );
        let wardrobe = store_with(&storage).load_wardrobe();

        let names: Vec<&str> = wardrobe.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["白いTシャツ", "帯", "スニーカー", "マフラー"]);
        assert_eq!(wardrobe.items()[1].category.key(), "kimono");
        assert_eq!(wardrobe.items()[2].added_date.timestamp(), 0);
        assert_eq!(wardrobe.items()[3].added_date.timestamp(), 0);
    }

    #[test]
    fn test_save_and_reload_through_files() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let store = PersistentStore::new(Arc::new(connection.clone()));

        let storage = MemoryStorage::new().with_contents(
            StoreKey::Wardrobe,
            r#"[{"id": "item::1", "name": "ブルージーンズ", "category": "bottoms", "addedDate": "2024-01-02T00:00:00Z"}]"#,
        );
        let wardrobe = store_with(&storage).load_wardrobe();
        let mut ledger = OutfitLedger::new();
        ledger.assign(OutfitMapper::parse_date("2024-06-01").unwrap(), "item::1");

        store.save_wardrobe(&wardrobe).unwrap();
        store.save_outfits(&ledger).unwrap();

        let reopened = PersistentStore::new(Arc::new(JsonConnection::new(temp_dir.path()).unwrap()));
        assert_eq!(reopened.load_wardrobe(), wardrobe);
        assert_eq!(reopened.load_outfits(), ledger);

        let raw = std::fs::read_to_string(connection.file_path(StoreKey::Wardrobe)).unwrap();
        assert!(raw.contains("\"addedDate\""));
    }

    #[test]
    fn test_save_failure_is_reported() {
        let storage = MemoryStorage::new();
        storage.fail_writes(StoreKey::Outfits, true);
        let store = store_with(&storage);

        assert!(store.save_outfits(&OutfitLedger::new()).is_err());
        assert!(storage.contents(StoreKey::Outfits).is_none());
    }
}
