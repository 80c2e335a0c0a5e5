use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Clothing item record, as persisted under `closet-clothes` and returned by the API.
///
/// Item ID format: "item::<uuid>". Records written by the browser version of the
/// closet carry numeric ids, which are read back as their decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    #[serde(deserialize_with = "deserialize_item_id")]
    pub id: String,
    pub name: String,
    /// Category key ("tops", "bottoms", "outerwear", "shoes", "accessory")
    pub category: String,
    #[serde(default)]
    pub color: Option<String>,
    /// Data URL or external image URL
    #[serde(default)]
    pub image: Option<String>,
    /// RFC 3339 timestamp (older records may hold a plain YYYY-MM-DD date)
    #[serde(rename = "addedDate", alias = "added_date", alias = "date", default)]
    pub added_date: String,
}

/// Item id as found in stored data: text, or a number written by the browser version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredItemId {
    Text(String),
    Number(u64),
}

impl From<StoredItemId> for String {
    fn from(id: StoredItemId) -> Self {
        match id {
            StoredItemId::Text(text) => text,
            StoredItemId::Number(number) => number.to_string(),
        }
    }
}

impl fmt::Display for StoredItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoredItemId::Text(text) => write!(f, "{}", text),
            StoredItemId::Number(number) => write!(f, "{}", number),
        }
    }
}

fn deserialize_item_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StoredItemId::deserialize(deserializer).map(String::from)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Optional date override (RFC 3339 or YYYY-MM-DD) - uses current time if not provided
    #[serde(default)]
    pub added_date: Option<String>,
}

/// Full replacement of an item's mutable fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub item: ClothingItem,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemListResponse {
    pub items: Vec<ClothingItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteItemResponse {
    pub deleted_id: String,
    /// Dates whose outfit lost the deleted item
    pub cleared_dates: Vec<String>,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitItemRequest {
    pub item_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitResponse {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub items: Vec<ClothingItem>,
}

/// Result of a toggle or wear on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitChangeResponse {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub items: Vec<ClothingItem>,
    /// Whether the item is worn on the date now
    pub assigned: bool,
    /// False when the outfit was already as requested
    pub changed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub items: Vec<ClothingItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// "validation", "not_found" or "persistence"
    pub error: String,
    pub message: String,
}

/// Category key plus its display label and style class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBadge {
    pub key: String,
    pub label: String,
    pub style: String,
}

/// Item as shown on any of the views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCard {
    pub id: String,
    pub name: String,
    pub category: CategoryBadge,
    pub color: Option<String>,
    pub image: Option<String>,
}

/// Home screen: the selected day's outfit and under-worn suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeView {
    pub revision: u64,
    pub selected_date: String,
    pub outfit: Vec<ItemCard>,
    pub outfit_empty_message: Option<String>,
    pub recommendations: Vec<ItemCard>,
    pub recommendations_empty_message: Option<String>,
}

/// Closet screen: the filtered, sorted wardrobe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosetView {
    pub revision: u64,
    /// Category key or "all"
    pub filter: String,
    /// "newest", "oldest", "name" or "category"
    pub sort: String,
    pub items: Vec<ItemCard>,
    pub total_items: usize,
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    pub item: ItemCard,
    pub checked: bool,
}

/// Calendar screen: the selected day's outfit, the wardrobe checklist and the month grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarView {
    pub revision: u64,
    pub selected_date: String,
    pub outfit: Vec<ItemCard>,
    pub outfit_empty_message: Option<String>,
    pub checklist: Vec<ChecklistEntry>,
    pub checklist_empty_message: Option<String>,
    pub month: CalendarMonth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectDateRequest {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosetFilterRequest {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
    /// Empty padding day after the end of the month, to complete the last week
    PaddingAfter,
}

/// Represents a calendar month with its outfit assignments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    /// e.g. "2024年6月"
    pub title: String,
    pub days: Vec<CalendarDay>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
}

/// Represents a single cell in the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells
    pub day: u32,
    /// ISO date for month days
    pub date: Option<String>,
    /// Number of items assigned to this date
    pub outfit_count: usize,
    pub is_today: bool,
    pub is_selected: bool,
    pub day_type: CalendarDayType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentDateResponse {
    pub month: u32,
    pub year: i32,
    pub day: u32,
    pub formatted_date: String, // e.g., "2024年6月1日"
    pub iso_date: String,       // e.g., "2024-06-01"
}
