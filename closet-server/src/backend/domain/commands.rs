// closet-server/src/backend/domain/commands.rs

//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the public DTOs defined in
//! the `shared` crate to these internal types.

pub mod items {
    use chrono::NaiveDate;

    use crate::backend::domain::models::ClothingItem;

    /// Input for registering a new clothing item.
    #[derive(Debug, Clone)]
    pub struct AddItemCommand {
        pub name: String,
        pub category: String,
        pub color: Option<String>,
        pub image: Option<String>,
        /// RFC 3339 or YYYY-MM-DD; defaults to now
        pub added_date: Option<String>,
    }

    /// Replacement values for an item's editable fields.
    #[derive(Debug, Clone)]
    pub struct UpdateItemCommand {
        pub item_id: String,
        pub name: String,
        pub category: String,
        pub color: Option<String>,
        pub image: Option<String>,
    }

    /// Query parameters for listing items.
    #[derive(Debug, Clone, Default)]
    pub struct ItemListQuery {
        /// Category key or "all"
        pub category: Option<String>,
        pub sort: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct RemoveItemResult {
        pub removed: ClothingItem,
        /// Dates the item was taken off
        pub cleared_dates: Vec<NaiveDate>,
    }
}

pub mod outfits {
    use chrono::NaiveDate;

    use crate::backend::domain::models::ClothingItem;

    /// Toggle or wear an item on a date.
    #[derive(Debug, Clone)]
    pub struct OutfitItemCommand {
        /// YYYY-MM-DD
        pub date: String,
        pub item_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct OutfitResult {
        pub date: NaiveDate,
        /// Items now worn on the date, in wardrobe order
        pub items: Vec<ClothingItem>,
        /// Whether the item is worn on the date after the command
        pub assigned: bool,
        pub changed: bool,
    }
}
