//! # Storage Module
//!
//! Handles persistence of the closet's two collections.
//!
//! The domain layer talks to `PersistentStore`, which owns the JSON layout and
//! the corruption policy. Backends implement `ClosetStorage` and only move text:
//!
//! - **json**: one file per key in the data directory, written atomically
//! - **memory**: process-local, with write-failure injection for tests

pub mod json;
pub mod memory;
pub mod store;
pub mod traits;

pub use json::JsonConnection;
pub use memory::MemoryStorage;
pub use store::PersistentStore;
pub use traits::{ClosetStorage, StoreKey};
