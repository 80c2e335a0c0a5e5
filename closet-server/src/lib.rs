//! Digital closet service: wardrobe inventory, per-date outfit records,
//! least-worn recommendations and cached screen views over a JSON API.

pub mod backend;
pub mod config;
