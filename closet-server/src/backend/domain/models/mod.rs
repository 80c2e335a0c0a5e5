pub mod category;
pub mod error;
pub mod item;
pub mod outfit;
pub mod wardrobe;

pub use category::{Category, CategoryInfo, CATEGORY_TABLE};
pub use error::{ClosetError, ClosetResult};
pub use item::{ClothingItem, ItemImage};
pub use outfit::OutfitLedger;
pub use wardrobe::{ItemFilter, ItemSort, Wardrobe};
