use chrono::Utc;
use log::{info, warn};

use crate::backend::domain::closet_store::{Change, ClosetStore};
use crate::backend::domain::commands::items::{
    AddItemCommand, ItemListQuery, RemoveItemResult, UpdateItemCommand,
};
use crate::backend::domain::models::item::{
    normalize_optional_text, parse_added_date, MAX_NAME_LENGTH,
};
use crate::backend::domain::models::{
    Category, ClosetError, ClosetResult, ClothingItem, ItemFilter, ItemImage, ItemSort,
};

/// Service for managing the clothing items in the wardrobe
#[derive(Clone)]
pub struct WardrobeService {
    store: ClosetStore,
}

impl WardrobeService {
    pub fn new(store: ClosetStore) -> Self {
        Self { store }
    }

    /// Register a new item
    pub fn add_item(&self, command: AddItemCommand) -> ClosetResult<ClothingItem> {
        info!("👕 Adding item: name={}, category={}", command.name, command.category);

        let (name, category) = self.validate_fields(&command.name, &command.category)?;
        let added_date = match command.added_date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => parse_added_date(raw).ok_or_else(|| {
                ClosetError::validation(format!("Invalid added date: '{}'", raw))
            })?,
            _ => Utc::now(),
        };

        let item = ClothingItem {
            id: self.store.next_id(),
            name,
            category,
            color: normalize_optional_text(command.color),
            image: command.image.as_deref().and_then(ItemImage::from_source),
            added_date,
        };

        let item = self.store.mutate(|wardrobe, _| {
            wardrobe.push(item.clone());
            Ok((item, Change::WARDROBE))
        })?;

        info!("✅ Added item: {} with ID: {}", item.name, item.id);
        Ok(item)
    }

    /// Replace an item's editable fields. Id and added date are kept.
    pub fn update_item(&self, command: UpdateItemCommand) -> ClosetResult<ClothingItem> {
        info!("✏️ Updating item: {}", command.item_id);

        let (name, category) = self.validate_fields(&command.name, &command.category)?;
        let color = normalize_optional_text(command.color);
        let image = command.image.as_deref().and_then(ItemImage::from_source);

        self.store.mutate(|wardrobe, _| {
            let existing = wardrobe
                .get(&command.item_id)
                .ok_or_else(|| ClosetError::item_not_found(&command.item_id))?;

            let updated = ClothingItem {
                id: existing.id.clone(),
                name,
                category,
                color,
                image,
                added_date: existing.added_date,
            };
            if &updated == existing {
                return Ok((updated, Change::NONE));
            }

            wardrobe.replace(updated.clone());
            Ok((updated, Change::WARDROBE))
        })
    }

    /// Delete an item and take it off every date it was worn
    pub fn remove_item(&self, item_id: &str) -> ClosetResult<RemoveItemResult> {
        info!("🗑️ Removing item: {}", item_id);

        let result = self.store.mutate(|wardrobe, ledger| {
            let removed = wardrobe.remove(item_id).ok_or_else(|| {
                warn!("Item not found: {}", item_id);
                ClosetError::item_not_found(item_id)
            })?;
            let cleared_dates = ledger.remove_item(item_id);
            let change = if cleared_dates.is_empty() { Change::WARDROBE } else { Change::BOTH };
            Ok((RemoveItemResult { removed, cleared_dates }, change))
        })?;

        info!(
            "✅ Removed item: {} (cleared from {} dates)",
            result.removed.name,
            result.cleared_dates.len()
        );
        Ok(result)
    }

    pub fn get_item(&self, item_id: &str) -> Option<ClothingItem> {
        self.store.read(|snapshot| snapshot.wardrobe.get(item_id).cloned())
    }

    /// Filtered and sorted items
    pub fn list_items(&self, query: ItemListQuery) -> ClosetResult<Vec<ClothingItem>> {
        let filter = query.category.as_deref().map_or(ItemFilter::All, ItemFilter::parse);
        let sort = match query.sort.as_deref() {
            Some(raw) => ItemSort::parse(raw)
                .ok_or_else(|| ClosetError::validation(format!("Unknown sort order: '{}'", raw)))?,
            None => ItemSort::default(),
        };

        let items = self.store.read(|snapshot| snapshot.wardrobe.list(&filter, sort));
        info!("Found {} items (filter={}, sort={})", items.len(), filter.key(), sort.key());
        Ok(items)
    }

    fn validate_fields(&self, name: &str, category: &str) -> ClosetResult<(String, Category)> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClosetError::validation("Item name cannot be empty"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ClosetError::validation(format!(
                "Item name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }

        let category = Category::parse_known(category)
            .ok_or_else(|| ClosetError::validation(format!("Unknown category: '{}'", category.trim())))?;

        Ok((name.to_string(), category))
    }
}
