//! In-memory wardrobe collection with filter and sort queries.

use std::cmp::Ordering;

use super::category::Category;
use super::item::ClothingItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemFilter {
    All,
    Category(Category),
}

impl ItemFilter {
    /// "all" (or blank) selects everything; anything else is an exact category match
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            ItemFilter::All
        } else {
            ItemFilter::Category(Category::parse(value))
        }
    }

    pub fn key(&self) -> &str {
        match self {
            ItemFilter::All => "all",
            ItemFilter::Category(category) => category.key(),
        }
    }

    pub fn matches(&self, item: &ClothingItem) -> bool {
        match self {
            ItemFilter::All => true,
            ItemFilter::Category(category) => &item.category == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemSort {
    #[default]
    Newest,
    Oldest,
    Name,
    Category,
}

impl ItemSort {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" => Some(ItemSort::Newest),
            "oldest" => Some(ItemSort::Oldest),
            "name" => Some(ItemSort::Name),
            "category" => Some(ItemSort::Category),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ItemSort::Newest => "newest",
            ItemSort::Oldest => "oldest",
            ItemSort::Name => "name",
            ItemSort::Category => "category",
        }
    }
}

/// Case-insensitive text order, falling back to the exact text
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// The wardrobe in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wardrobe {
    items: Vec<ClothingItem>,
}

impl Wardrobe {
    pub fn new(items: Vec<ClothingItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, item_id: &str) -> Option<&ClothingItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.get(item_id).is_some()
    }

    pub fn push(&mut self, item: ClothingItem) {
        self.items.push(item);
    }

    /// Replace the stored item with the same id. Returns false if there is none.
    pub fn replace(&mut self, item: ClothingItem) -> bool {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                *existing = item;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, item_id: &str) -> Option<ClothingItem> {
        let index = self.items.iter().position(|item| item.id == item_id)?;
        Some(self.items.remove(index))
    }

    /// Filtered and sorted copy of the wardrobe. Ties keep insertion order.
    pub fn list(&self, filter: &ItemFilter, sort: ItemSort) -> Vec<ClothingItem> {
        let mut items: Vec<ClothingItem> = self
            .items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();

        // slice::sort_by is stable
        match sort {
            ItemSort::Newest => items.sort_by(|a, b| b.added_date.cmp(&a.added_date)),
            ItemSort::Oldest => items.sort_by(|a, b| a.added_date.cmp(&b.added_date)),
            ItemSort::Name => items.sort_by(|a, b| compare_text(&a.name, &b.name)),
            ItemSort::Category => {
                items.sort_by(|a, b| compare_text(a.category.key(), b.category.key()))
            }
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(id: &str, name: &str, category: &str, ymd: (i32, u32, u32)) -> ClothingItem {
        ClothingItem {
            id: id.to_string(),
            name: name.to_string(),
            category: Category::parse(category),
            color: None,
            image: None,
            added_date: Utc.with_ymd_and_hms(ymd.0, ymd.1, ymd.2, 0, 0, 0).unwrap(),
        }
    }

    fn ids(items: &[ClothingItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    fn sample() -> Wardrobe {
        Wardrobe::new(vec![
            item("a", "white shirt", "tops", (2024, 1, 1)),
            item("b", "Blue jeans", "bottoms", (2024, 1, 3)),
            item("c", "black jacket", "outerwear", (2024, 1, 2)),
        ])
    }

    #[test]
    fn test_list_newest_and_oldest() {
        let wardrobe = sample();
        assert_eq!(ids(&wardrobe.list(&ItemFilter::All, ItemSort::Newest)), vec!["b", "c", "a"]);
        assert_eq!(ids(&wardrobe.list(&ItemFilter::All, ItemSort::Oldest)), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_list_date_ties_keep_insertion_order() {
        let wardrobe = Wardrobe::new(vec![
            item("first", "x", "tops", (2024, 1, 1)),
            item("second", "y", "tops", (2024, 1, 1)),
            item("third", "z", "tops", (2024, 1, 1)),
        ]);
        assert_eq!(
            ids(&wardrobe.list(&ItemFilter::All, ItemSort::Newest)),
            vec!["first", "second", "third"]
        );
        assert_eq!(
            ids(&wardrobe.list(&ItemFilter::All, ItemSort::Oldest)),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn test_list_by_name_ignores_case() {
        let wardrobe = sample();
        assert_eq!(ids(&wardrobe.list(&ItemFilter::All, ItemSort::Name)), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_list_by_category_key() {
        let mut wardrobe = sample();
        wardrobe.push(item("d", "sneakers", "shoes", (2024, 1, 4)));
        wardrobe.push(item("e", "obi", "kimono", (2024, 1, 5)));
        assert_eq!(
            ids(&wardrobe.list(&ItemFilter::All, ItemSort::Category)),
            vec!["b", "e", "c", "d", "a"]
        );
    }

    #[test]
    fn test_filter_by_category() {
        let wardrobe = sample();
        let tops = wardrobe.list(&ItemFilter::parse("tops"), ItemSort::Newest);
        assert_eq!(ids(&tops), vec!["a"]);
        assert!(wardrobe.list(&ItemFilter::parse("shoes"), ItemSort::Newest).is_empty());
        assert_eq!(wardrobe.list(&ItemFilter::parse("all"), ItemSort::Newest).len(), 3);
    }

    #[test]
    fn test_replace_and_remove() {
        let mut wardrobe = sample();
        let mut edited = wardrobe.get("a").cloned().unwrap();
        edited.name = "cream shirt".to_string();
        assert!(wardrobe.replace(edited));
        assert_eq!(wardrobe.get("a").unwrap().name, "cream shirt");

        assert!(wardrobe.remove("b").is_some());
        assert!(wardrobe.remove("b").is_none());
        assert_eq!(wardrobe.len(), 2);
        assert!(!wardrobe.replace(item("zzz", "ghost", "tops", (2024, 1, 1))));
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!(ItemSort::parse("Newest"), Some(ItemSort::Newest));
        assert_eq!(ItemSort::parse("category"), Some(ItemSort::Category));
        assert_eq!(ItemSort::parse("random"), None);
    }
}
