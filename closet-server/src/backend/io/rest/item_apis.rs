//! # REST API for Clothing Items
//!
//! Endpoints for registering, editing, removing and listing items.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::info;
use serde::Deserialize;

use crate::backend::domain::commands::items::ItemListQuery;
use crate::backend::domain::models::ClosetError;
use crate::backend::io::rest::error_response;
use crate::backend::io::rest::extractors::{ApiJson, ApiQuery};
use crate::backend::io::rest::mappers::ItemMapper;
use crate::backend::AppState;
use shared::{CreateItemRequest, UpdateItemRequest};

#[derive(Debug, Deserialize)]
pub struct ItemListParams {
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// Create a router for item related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(add_item))
        .route("/:id", get(get_item).put(update_item).delete(remove_item))
}

async fn list_items(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ItemListParams>,
) -> impl IntoResponse {
    info!("GET /api/items - query: {:?}", params);

    let query = ItemListQuery {
        category: params.category,
        sort: params.sort,
    };
    match state.wardrobe_service.list_items(query) {
        Ok(items) => (StatusCode::OK, Json(ItemMapper::to_list_dto(&items))).into_response(),
        Err(e) => error_response(e),
    }
}

async fn add_item(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateItemRequest>,
) -> impl IntoResponse {
    info!("POST /api/items - name: {}, category: {}", request.name, request.category);

    match state.wardrobe_service.add_item(ItemMapper::to_add_command(request)) {
        Ok(item) => (
            StatusCode::CREATED,
            Json(ItemMapper::to_item_response(&item, "Item added successfully")),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

async fn get_item(State(state): State<AppState>, Path(item_id): Path<String>) -> impl IntoResponse {
    info!("GET /api/items/{}", item_id);

    match state.wardrobe_service.get_item(&item_id) {
        Some(item) => (StatusCode::OK, Json(ItemMapper::to_dto(&item))).into_response(),
        None => error_response(ClosetError::item_not_found(&item_id)),
    }
}

async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    ApiJson(request): ApiJson<UpdateItemRequest>,
) -> impl IntoResponse {
    info!("PUT /api/items/{}", item_id);

    match state
        .wardrobe_service
        .update_item(ItemMapper::to_update_command(item_id, request))
    {
        Ok(item) => (
            StatusCode::OK,
            Json(ItemMapper::to_item_response(&item, "Item updated successfully")),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

async fn remove_item(State(state): State<AppState>, Path(item_id): Path<String>) -> impl IntoResponse {
    info!("DELETE /api/items/{}", item_id);

    match state.wardrobe_service.remove_item(&item_id) {
        Ok(result) => (StatusCode::OK, Json(ItemMapper::to_delete_response(&result))).into_response(),
        Err(e) => error_response(e),
    }
}
