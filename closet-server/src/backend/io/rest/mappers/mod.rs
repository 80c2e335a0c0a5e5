pub mod item_mapper;
pub mod outfit_mapper;

pub use item_mapper::ItemMapper;
pub use outfit_mapper::OutfitMapper;
