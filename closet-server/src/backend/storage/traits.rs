//! # Storage Traits
//!
//! The closet persists two JSON documents under fixed keys. Backends only move
//! text in and out; parsing and the corruption policy live in `PersistentStore`.

use anyhow::Result;

/// Keys of the persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Ordered list of clothing items
    Wardrobe,
    /// Map from ISO date to assigned item ids
    Outfits,
}

impl StoreKey {
    /// Key name, shared with the browser version's local storage
    pub fn name(&self) -> &'static str {
        match self {
            StoreKey::Wardrobe => "closet-clothes",
            StoreKey::Outfits => "closet-outfits",
        }
    }
}

/// Trait defining the interface for raw closet storage
///
/// Implementations must make a successful `write` visible to every later
/// `read` of the same key.
pub trait ClosetStorage: Send + Sync {
    /// Read the stored document, or None if nothing was ever written
    fn read(&self, key: StoreKey) -> Result<Option<String>>;

    /// Durably replace the stored document
    fn write(&self, key: StoreKey, contents: &str) -> Result<()>;
}
