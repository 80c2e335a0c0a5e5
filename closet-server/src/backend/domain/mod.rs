//! # Domain Module
//!
//! Contains all business logic for the digital closet.
//!
//! ## Module Organization
//!
//! - **closet_store**: the single owner of the wardrobe, outfit ledger and views
//! - **wardrobe_service**: item registration, editing, removal and listing
//! - **outfit_service**: which items were worn on which date
//! - **recommendation**: under-worn item suggestions
//! - **calendar**: month grid generation
//! - **views**: home, closet and calendar view models and their re-render rules
//! - **view_service**: cached views and selection changes
//!
//! ## Business Rules
//!
//! - Item names are non-empty and at most 100 characters
//! - New and edited items must use a known category
//! - Every id in the outfit ledger refers to an item in the wardrobe
//! - Removing an item takes it off every date it was worn
//! - A mutation is committed only after it was persisted

pub mod calendar;
pub mod closet_store;
pub mod commands;
pub mod id_generator;
pub mod models;
pub mod outfit_service;
pub mod recommendation;
pub mod view_service;
pub mod views;
pub mod wardrobe_service;

pub use calendar::CalendarService;
pub use closet_store::{Change, ClosetSnapshot, ClosetStore};
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use outfit_service::OutfitService;
pub use recommendation::RecommendationService;
pub use view_service::ViewService;
pub use views::{ViewConfig, ViewSynchronizer};
pub use wardrobe_service::WardrobeService;
