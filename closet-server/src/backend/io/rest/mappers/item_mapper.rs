//! closet-server/src/backend/io/rest/mappers/item_mapper.rs

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::warn;
use shared::{
    ClothingItem as SharedItem, CreateItemRequest, DeleteItemResponse, ItemListResponse,
    ItemResponse, UpdateItemRequest,
};

use crate::backend::domain::commands::items::{AddItemCommand, RemoveItemResult, UpdateItemCommand};
use crate::backend::domain::models::item::{normalize_optional_text, parse_added_date};
use crate::backend::domain::models::{Category, ClothingItem as DomainItem, ItemImage};

/// Mapper to convert between shared ClothingItem DTOs and domain items.
pub struct ItemMapper;

impl ItemMapper {
    /// Converts a stored/shared item to a domain item.
    ///
    /// Only a missing id or name rejects the record. A blank or unreadable
    /// timestamp becomes the UNIX epoch so the item sorts as oldest.
    pub fn to_domain(dto: SharedItem) -> Result<DomainItem> {
        if dto.id.trim().is_empty() {
            return Err(anyhow::anyhow!("Item has an empty id"));
        }
        if dto.name.trim().is_empty() {
            return Err(anyhow::anyhow!("Item {} has an empty name", dto.id));
        }
        let added_date = parse_added_date(&dto.added_date).unwrap_or_else(|| {
            warn!("⚠️ Item {} has an invalid date '{}', using {}", dto.id, dto.added_date, DateTime::<Utc>::UNIX_EPOCH);
            DateTime::<Utc>::UNIX_EPOCH
        });

        Ok(DomainItem {
            id: dto.id,
            name: dto.name.trim().to_string(),
            category: Category::parse(&dto.category),
            color: normalize_optional_text(dto.color),
            image: dto.image.as_deref().and_then(ItemImage::from_source),
            added_date,
        })
    }

    /// Converts a domain item to a shared DTO.
    pub fn to_dto(domain: &DomainItem) -> SharedItem {
        SharedItem {
            id: domain.id.clone(),
            name: domain.name.clone(),
            category: domain.category.key().to_string(),
            color: domain.color.clone(),
            image: domain.image.as_ref().map(|image| image.as_str().to_string()),
            added_date: domain.added_date.to_rfc3339(),
        }
    }

    pub fn to_item_response(domain: &DomainItem, message: &str) -> ItemResponse {
        ItemResponse {
            item: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_add_command(request: CreateItemRequest) -> AddItemCommand {
        AddItemCommand {
            name: request.name,
            category: request.category,
            color: request.color,
            image: request.image,
            added_date: request.added_date,
        }
    }

    pub fn to_update_command(item_id: String, request: UpdateItemRequest) -> UpdateItemCommand {
        UpdateItemCommand {
            item_id,
            name: request.name,
            category: request.category,
            color: request.color,
            image: request.image,
        }
    }

    pub fn to_delete_response(result: &RemoveItemResult) -> DeleteItemResponse {
        DeleteItemResponse {
            deleted_id: result.removed.id.clone(),
            cleared_dates: result
                .cleared_dates
                .iter()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .collect(),
            success_message: format!("Removed {}", result.removed.name),
        }
    }

    pub fn to_list_dto(domain_items: &[DomainItem]) -> ItemListResponse {
        ItemListResponse {
            items: domain_items.iter().map(Self::to_dto).collect(),
        }
    }
}
