//! closet-server/src/backend/io/rest/mappers/outfit_mapper.rs

use chrono::NaiveDate;
use log::warn;
use shared::{OutfitChangeResponse, OutfitResponse, StoredItemId};
use std::collections::{BTreeMap, BTreeSet};

use crate::backend::domain::commands::outfits::OutfitResult;
use crate::backend::domain::models::{ClothingItem, OutfitLedger};
use crate::backend::io::rest::mappers::item_mapper::ItemMapper;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Mapper between the stored date → ids map and the domain ledger.
pub struct OutfitMapper;

impl OutfitMapper {
    pub fn parse_date(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Build a ledger from stored assignments. Entries with unreadable dates are skipped.
    pub fn to_domain(stored: BTreeMap<String, Vec<StoredItemId>>) -> OutfitLedger {
        let mut assignments: BTreeMap<NaiveDate, BTreeSet<String>> = BTreeMap::new();

        for (key, ids) in stored {
            let Some(date) = Self::parse_date(&key) else {
                warn!("⚠️ Skipping outfit entry with invalid date: '{}'", key);
                continue;
            };
            assignments
                .entry(date)
                .or_default()
                .extend(ids.into_iter().map(String::from));
        }

        OutfitLedger::from_assignments(assignments)
    }

    pub fn to_stored(ledger: &OutfitLedger) -> BTreeMap<String, Vec<String>> {
        ledger
            .iter()
            .map(|(date, ids)| (Self::format_date(*date), ids.iter().cloned().collect()))
            .collect()
    }

    pub fn to_outfit_response(date: NaiveDate, items: &[ClothingItem]) -> OutfitResponse {
        OutfitResponse {
            date: Self::format_date(date),
            items: items.iter().map(ItemMapper::to_dto).collect(),
        }
    }

    pub fn to_change_response(result: &OutfitResult) -> OutfitChangeResponse {
        OutfitChangeResponse {
            date: Self::format_date(result.date),
            items: result.items.iter().map(ItemMapper::to_dto).collect(),
            assigned: result.assigned,
            changed: result.changed,
        }
    }
}
