//! Under-worn item suggestions.

use log::debug;

use crate::backend::domain::closet_store::ClosetStore;
use crate::backend::domain::models::{ClothingItem, OutfitLedger};

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Rank items by how often they were worn, least first.
///
/// Items with equal wear counts keep their wardrobe order.
pub fn recommend<'a>(items: &'a [ClothingItem], ledger: &OutfitLedger, limit: usize) -> Vec<&'a ClothingItem> {
    let counts = ledger.wear_counts();
    let mut ranked: Vec<(usize, &ClothingItem)> = items
        .iter()
        .map(|item| (counts.get(item.id.as_str()).copied().unwrap_or(0), item))
        .collect();

    // stable
    ranked.sort_by_key(|(count, _)| *count);

    ranked.into_iter().take(limit).map(|(_, item)| item).collect()
}

#[derive(Clone)]
pub struct RecommendationService {
    store: ClosetStore,
    default_limit: usize,
}

impl RecommendationService {
    pub fn new(store: ClosetStore, default_limit: usize) -> Self {
        Self { store, default_limit }
    }

    pub fn recommend(&self, limit: Option<usize>) -> Vec<ClothingItem> {
        let limit = limit.unwrap_or(self.default_limit);
        let suggestions: Vec<ClothingItem> = self.store.read(|snapshot| {
            recommend(snapshot.wardrobe.items(), snapshot.ledger, limit)
                .into_iter()
                .cloned()
                .collect()
        });
        debug!("💡 Recommending {} of limit {}", suggestions.len(), limit);
        suggestions
    }
}
