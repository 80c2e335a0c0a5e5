//! Single owner of the in-memory closet state.
//!
//! Every mutation runs against working copies of the wardrobe and the outfit
//! ledger while the state lock is held. The changed collections are written
//! through to the `PersistentStore`; only when every write succeeded are the
//! copies committed and the dependent views re-rendered. A failed write leaves
//! the committed state untouched.

use log::{error, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::backend::domain::id_generator::IdGenerator;
use crate::backend::domain::models::{ClosetError, ClosetResult, OutfitLedger, Wardrobe};
use crate::backend::domain::views::ViewSynchronizer;
use crate::backend::storage::PersistentStore;

/// Which collections a mutation changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Change {
    pub wardrobe: bool,
    pub outfits: bool,
}

impl Change {
    pub const NONE: Change = Change { wardrobe: false, outfits: false };
    pub const WARDROBE: Change = Change { wardrobe: true, outfits: false };
    pub const OUTFITS: Change = Change { wardrobe: false, outfits: true };
    pub const BOTH: Change = Change { wardrobe: true, outfits: true };

    pub fn is_none(&self) -> bool {
        !self.wardrobe && !self.outfits
    }
}

/// Read-only view of the committed state
pub struct ClosetSnapshot<'a> {
    pub wardrobe: &'a Wardrobe,
    pub ledger: &'a OutfitLedger,
    pub views: &'a ViewSynchronizer,
}

struct ClosetState {
    wardrobe: Wardrobe,
    ledger: OutfitLedger,
    views: ViewSynchronizer,
}

#[derive(Clone)]
pub struct ClosetStore {
    state: Arc<Mutex<ClosetState>>,
    store: PersistentStore,
    ids: Arc<dyn IdGenerator>,
}

impl ClosetStore {
    /// Load both collections, drop dangling outfit references and render every view.
    ///
    /// The repair is in memory only. Stored documents are rewritten by the next
    /// mutation, never by loading.
    pub fn open(store: PersistentStore, ids: Arc<dyn IdGenerator>, mut views: ViewSynchronizer) -> Self {
        let wardrobe = store.load_wardrobe();
        let mut ledger = store.load_outfits();

        let dropped = ledger.retain_items(|item_id| wardrobe.contains(item_id));
        if dropped > 0 {
            warn!("⚠️ Ignoring {} outfit references to items that are not in the wardrobe", dropped);
        }

        views.render_all(&wardrobe, &ledger);

        Self {
            state: Arc::new(Mutex::new(ClosetState { wardrobe, ledger, views })),
            store,
            ids,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ClosetState> {
        // State is only replaced after a successful commit, so a poisoned lock still guards consistent data
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn next_id(&self) -> String {
        self.ids.next_id()
    }

    /// Run a read-only query against the committed state
    pub fn read<R>(&self, query: impl FnOnce(ClosetSnapshot<'_>) -> R) -> R {
        let state = self.lock();
        query(ClosetSnapshot {
            wardrobe: &state.wardrobe,
            ledger: &state.ledger,
            views: &state.views,
        })
    }

    /// Apply a mutation with write-through persistence.
    ///
    /// `operation` edits working copies and reports what it changed. Nothing is
    /// committed if it returns an error or if persisting fails.
    pub fn mutate<R>(
        &self,
        operation: impl FnOnce(&mut Wardrobe, &mut OutfitLedger) -> ClosetResult<(R, Change)>,
    ) -> ClosetResult<R> {
        let mut state = self.lock();
        let mut wardrobe = state.wardrobe.clone();
        let mut ledger = state.ledger.clone();

        let (result, change) = operation(&mut wardrobe, &mut ledger)?;
        if change.is_none() {
            return Ok(result);
        }

        self.persist(&state.ledger, &wardrobe, &ledger, change)?;

        let state = &mut *state;
        state.wardrobe = wardrobe;
        state.ledger = ledger;
        state.views.sync(change, &state.wardrobe, &state.ledger);

        Ok(result)
    }

    /// Change view selection state and re-render the affected views
    pub fn update_views<R>(
        &self,
        update: impl FnOnce(&mut ViewSynchronizer, &Wardrobe, &OutfitLedger) -> R,
    ) -> R {
        let mut state = self.lock();
        let state = &mut *state;
        update(&mut state.views, &state.wardrobe, &state.ledger)
    }

    /// Outfits are written first so the stored outfits never reference an item
    /// missing from the stored wardrobe. If the wardrobe write then fails the
    /// previous outfits are written back.
    fn persist(
        &self,
        committed_ledger: &OutfitLedger,
        wardrobe: &Wardrobe,
        ledger: &OutfitLedger,
        change: Change,
    ) -> ClosetResult<()> {
        if change.outfits {
            self.store.save_outfits(ledger).map_err(|e| {
                error!("❌ Failed to save outfits: {:#}", e);
                ClosetError::Persistence(e)
            })?;
        }

        if change.wardrobe {
            if let Err(e) = self.store.save_wardrobe(wardrobe) {
                error!("❌ Failed to save wardrobe: {:#}", e);
                if change.outfits {
                    if let Err(restore_error) = self.store.save_outfits(committed_ledger) {
                        error!("❌ Failed to restore previous outfits: {:#}", restore_error);
                    }
                }
                return Err(ClosetError::Persistence(e));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::id_generator::SequentialIdGenerator;
    use crate::backend::domain::models::{Category, ClothingItem};
    use crate::backend::domain::views::ViewConfig;
    use crate::backend::storage::{MemoryStorage, StoreKey};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn open(storage: &MemoryStorage) -> ClosetStore {
        ClosetStore::open(
            PersistentStore::new(Arc::new(storage.clone())),
            Arc::new(SequentialIdGenerator::new()),
            ViewSynchronizer::new(ViewConfig::default())
                .with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
        )
    }

    fn shirt(id: &str) -> ClothingItem {
        ClothingItem {
            id: id.to_string(),
            name: "白いTシャツ".to_string(),
            category: Category::Tops,
            color: None,
            image: None,
            added_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_open_repairs_dangling_references() {
        let storage = MemoryStorage::new()
            .with_contents(
                StoreKey::Wardrobe,
                r#"[{"id": 1, "name": "白いTシャツ", "category": "tops", "addedDate": "2024-01-01T00:00:00Z"}]"#,
            )
            .with_contents(StoreKey::Outfits, r#"{"2024-06-01": [1, 99], "2024-06-02": [99], "2024-06-03": []}"#);

        let store = open(&storage);

        store.read(|snapshot| {
            let dates: Vec<NaiveDate> = snapshot.ledger.assigned_dates().collect();
            assert_eq!(dates, vec![NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()]);
            assert_eq!(snapshot.ledger.all_assigned_ids(), vec!["1"]);
        });
        let stored = storage.contents(StoreKey::Outfits).unwrap();
        assert!(stored.contains("99"));
    }

    #[test]
    fn test_unreadable_wardrobe_keeps_stored_outfits() {
        let outfits = r#"{"2024-06-01": [1]}"#;
        let storage = MemoryStorage::new()
            .with_contents(
                StoreKey::Wardrobe,
                r#"[{"id": 1, "name": "白いTシャツ", "category": "tops", "date": "2024-05-01"}]"#,
            )
            .with_contents(StoreKey::Outfits, outfits);
        storage.fail_reads(StoreKey::Wardrobe, true);

        let store = open(&storage);

        assert!(store.read(|snapshot| snapshot.ledger.is_empty()));
        assert_eq!(storage.contents(StoreKey::Outfits).as_deref(), Some(outfits));

        storage.fail_reads(StoreKey::Wardrobe, false);
        let reopened = open(&storage);
        reopened.read(|snapshot| {
            assert!(snapshot.ledger.is_assigned(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), "1"));
        });
    }

    #[test]
    fn test_corrupt_wardrobe_keeps_stored_outfits() {
        let outfits = r#"{"2024-06-01": [1], "2024-06-02": [2]}"#;
        let storage = MemoryStorage::new()
            .with_contents(StoreKey::Wardrobe, "[{\"id\": ")
            .with_contents(StoreKey::Outfits, outfits);

        open(&storage);

        assert_eq!(storage.contents(StoreKey::Outfits).as_deref(), Some(outfits));
    }

    #[test]
    fn test_mutation_commits_and_persists() {
        let storage = MemoryStorage::new();
        let store = open(&storage);

        store
            .mutate(|wardrobe, _| {
                wardrobe.push(shirt("item::1"));
                Ok(((), Change::WARDROBE))
            })
            .unwrap();

        assert!(store.read(|snapshot| snapshot.wardrobe.contains("item::1")));
        assert!(storage.contents(StoreKey::Wardrobe).unwrap().contains("item::1"));
        assert!(storage.contents(StoreKey::Outfits).is_none());
    }

    #[test]
    fn test_failed_operation_commits_nothing() {
        let storage = MemoryStorage::new();
        let store = open(&storage);

        let result: ClosetResult<()> = store.mutate(|wardrobe, _| {
            wardrobe.push(shirt("item::1"));
            Err(ClosetError::validation("nope"))
        });

        assert!(matches!(result, Err(ClosetError::Validation(_))));
        assert!(store.read(|snapshot| snapshot.wardrobe.is_empty()));
        assert!(storage.contents(StoreKey::Wardrobe).is_none());
    }

    #[test]
    fn test_failed_wardrobe_write_restores_outfits() {
        let storage = MemoryStorage::new();
        let store = open(&storage);
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        store
            .mutate(|wardrobe, ledger| {
                wardrobe.push(shirt("item::1"));
                ledger.assign(date, "item::1");
                Ok(((), Change::BOTH))
            })
            .unwrap();
        let outfits_before = storage.contents(StoreKey::Outfits).unwrap();
        let wardrobe_before = storage.contents(StoreKey::Wardrobe).unwrap();

        storage.fail_writes(StoreKey::Wardrobe, true);
        let result = store.mutate(|wardrobe, ledger| {
            wardrobe.remove("item::1");
            ledger.remove_item("item::1");
            Ok(((), Change::BOTH))
        });

        assert!(matches!(result, Err(ClosetError::Persistence(_))));
        assert_eq!(storage.contents(StoreKey::Outfits).unwrap(), outfits_before);
        assert_eq!(storage.contents(StoreKey::Wardrobe).unwrap(), wardrobe_before);
        store.read(|snapshot| {
            assert!(snapshot.wardrobe.contains("item::1"));
            assert!(snapshot.ledger.is_assigned(date, "item::1"));
        });
    }

    #[test]
    fn test_unchanged_mutation_skips_persistence() {
        let storage = MemoryStorage::new();
        storage.fail_writes(StoreKey::Wardrobe, true);
        let store = open(&storage);

        let value = store.mutate(|_, _| Ok((7, Change::NONE))).unwrap();
        assert_eq!(value, 7);
    }
}
