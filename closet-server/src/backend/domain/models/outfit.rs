//! Outfit assignments: which items were worn on which calendar date.
//!
//! A date with no items has no entry. Every write path prunes empty sets, so
//! "empty set" and "no entry" never both exist.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::item::ClothingItem;
use super::wardrobe::Wardrobe;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutfitLedger {
    dates: BTreeMap<NaiveDate, BTreeSet<String>>,
}

impl OutfitLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from raw assignments, dropping empty dates
    pub fn from_assignments(assignments: BTreeMap<NaiveDate, BTreeSet<String>>) -> Self {
        let dates = assignments
            .into_iter()
            .filter(|(_, ids)| !ids.is_empty())
            .collect();
        Self { dates }
    }

    pub fn item_ids(&self, date: NaiveDate) -> Option<&BTreeSet<String>> {
        self.dates.get(&date)
    }

    pub fn is_assigned(&self, date: NaiveDate, item_id: &str) -> bool {
        self.dates
            .get(&date)
            .map_or(false, |ids| ids.contains(item_id))
    }

    /// Items worn on a date, in wardrobe order
    pub fn resolve<'w>(&self, date: NaiveDate, wardrobe: &'w Wardrobe) -> Vec<&'w ClothingItem> {
        match self.dates.get(&date) {
            Some(ids) => wardrobe
                .items()
                .iter()
                .filter(|item| ids.contains(&item.id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Flip membership of an item on a date. Returns true if the item is now assigned.
    pub fn toggle(&mut self, date: NaiveDate, item_id: &str) -> bool {
        let ids = self.dates.entry(date).or_default();
        let assigned = if ids.remove(item_id) {
            false
        } else {
            ids.insert(item_id.to_string());
            true
        };
        if ids.is_empty() {
            self.dates.remove(&date);
        }
        assigned
    }

    /// Assign an item to a date. Returns false if it was already there.
    pub fn assign(&mut self, date: NaiveDate, item_id: &str) -> bool {
        self.dates.entry(date).or_default().insert(item_id.to_string())
    }

    /// Remove an item from every date, returning the dates it was removed from
    pub fn remove_item(&mut self, item_id: &str) -> Vec<NaiveDate> {
        let mut cleared = Vec::new();
        for (date, ids) in self.dates.iter_mut() {
            if ids.remove(item_id) {
                cleared.push(*date);
            }
        }
        self.dates.retain(|_, ids| !ids.is_empty());
        cleared
    }

    /// Keep only ids accepted by `keep`. Returns how many references were dropped.
    pub fn retain_items<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let mut dropped = 0;
        for ids in self.dates.values_mut() {
            let before = ids.len();
            ids.retain(|id| keep(id));
            dropped += before - ids.len();
        }
        self.dates.retain(|_, ids| !ids.is_empty());
        dropped
    }

    /// Every assigned id across all dates, one entry per assignment
    pub fn all_assigned_ids(&self) -> Vec<&str> {
        self.dates
            .values()
            .flat_map(|ids| ids.iter().map(String::as_str))
            .collect()
    }

    /// Number of dates each item is assigned to
    pub fn wear_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for item_id in self.all_assigned_ids() {
            *counts.entry(item_id).or_insert(0) += 1;
        }
        counts
    }

    /// Dates with at least one assigned item, in calendar order
    pub fn assigned_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &BTreeSet<String>)> {
        self.dates.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(ymd: &str) -> NaiveDate {
        NaiveDate::parse_from_str(ymd, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_toggle_twice_restores_date() {
        let mut ledger = OutfitLedger::new();
        ledger.assign(date("2024-06-01"), "a");
        let before = ledger.clone();

        assert!(ledger.toggle(date("2024-06-01"), "b"));
        assert!(ledger.is_assigned(date("2024-06-01"), "b"));
        assert!(!ledger.toggle(date("2024-06-01"), "b"));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_toggle_off_last_item_prunes_date() {
        let mut ledger = OutfitLedger::new();
        ledger.toggle(date("2024-06-01"), "a");
        ledger.toggle(date("2024-06-01"), "a");

        assert!(ledger.item_ids(date("2024-06-01")).is_none());
        assert!(ledger.is_empty());
        assert_eq!(ledger, OutfitLedger::new());
    }

    #[test]
    fn test_assign_is_idempotent() {
        let mut ledger = OutfitLedger::new();
        assert!(ledger.assign(date("2024-06-01"), "a"));
        assert!(!ledger.assign(date("2024-06-01"), "a"));
        assert_eq!(ledger.item_ids(date("2024-06-01")).unwrap().len(), 1);
    }

    #[test]
    fn test_remove_item_clears_every_date() {
        let mut ledger = OutfitLedger::new();
        ledger.assign(date("2024-06-01"), "x");
        ledger.assign(date("2024-06-02"), "x");
        ledger.assign(date("2024-06-02"), "y");
        ledger.assign(date("2024-06-03"), "y");

        let cleared = ledger.remove_item("x");
        assert_eq!(cleared, vec![date("2024-06-01"), date("2024-06-02")]);
        assert!(ledger.item_ids(date("2024-06-01")).is_none());
        assert!(!ledger.is_assigned(date("2024-06-02"), "x"));
        assert!(ledger.is_assigned(date("2024-06-02"), "y"));
        assert!(ledger.remove_item("x").is_empty());
    }

    #[test]
    fn test_wear_counts_and_multiset() {
        let mut ledger = OutfitLedger::new();
        ledger.assign(date("2024-06-01"), "a");
        ledger.assign(date("2024-06-01"), "b");
        ledger.assign(date("2024-06-02"), "b");

        let mut all = ledger.all_assigned_ids();
        all.sort();
        assert_eq!(all, vec!["a", "b", "b"]);

        let counts = ledger.wear_counts();
        assert_eq!(counts.get("a"), Some(&1));
        assert_eq!(counts.get("b"), Some(&2));
        assert_eq!(counts.get("c"), None);
    }

    #[test]
    fn test_from_assignments_and_retain() {
        let mut raw = BTreeMap::new();
        raw.insert(date("2024-06-01"), BTreeSet::new());
        raw.insert(
            date("2024-06-02"),
            ["a", "ghost"].iter().map(|s| s.to_string()).collect(),
        );

        let mut ledger = OutfitLedger::from_assignments(raw);
        assert_eq!(ledger.assigned_dates().collect::<Vec<_>>(), vec![date("2024-06-02")]);

        let dropped = ledger.retain_items(|id| id != "ghost");
        assert_eq!(dropped, 1);
        assert!(ledger.is_assigned(date("2024-06-02"), "a"));

        assert_eq!(ledger.retain_items(|_| false), 1);
        assert!(ledger.is_empty());
    }
}
