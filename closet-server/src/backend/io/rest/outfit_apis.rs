//! # REST API for Outfits
//!
//! What was worn on a given date. Dates are path segments in YYYY-MM-DD form.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::info;

use crate::backend::domain::commands::outfits::OutfitItemCommand;
use crate::backend::io::rest::error_response;
use crate::backend::io::rest::extractors::ApiJson;
use crate::backend::io::rest::mappers::OutfitMapper;
use crate::backend::AppState;
use shared::OutfitItemRequest;

/// Create a router for outfit related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:date", get(get_outfit))
        .route("/:date/toggle", post(toggle_outfit))
        .route("/:date/wear", post(wear_item))
}

async fn get_outfit(State(state): State<AppState>, Path(date): Path<String>) -> impl IntoResponse {
    info!("GET /api/outfits/{}", date);

    match state.outfit_service.get_outfit(&date) {
        Ok((date, items)) => {
            (StatusCode::OK, Json(OutfitMapper::to_outfit_response(date, &items))).into_response()
        }
        Err(e) => error_response(e),
    }
}

async fn toggle_outfit(
    State(state): State<AppState>,
    Path(date): Path<String>,
    ApiJson(request): ApiJson<OutfitItemRequest>,
) -> impl IntoResponse {
    info!("POST /api/outfits/{}/toggle - item: {}", date, request.item_id);

    let command = OutfitItemCommand {
        date,
        item_id: request.item_id,
    };
    match state.outfit_service.toggle_outfit(command) {
        Ok(result) => (StatusCode::OK, Json(OutfitMapper::to_change_response(&result))).into_response(),
        Err(e) => error_response(e),
    }
}

async fn wear_item(
    State(state): State<AppState>,
    Path(date): Path<String>,
    ApiJson(request): ApiJson<OutfitItemRequest>,
) -> impl IntoResponse {
    info!("POST /api/outfits/{}/wear - item: {}", date, request.item_id);

    let command = OutfitItemCommand {
        date,
        item_id: request.item_id,
    };
    match state.outfit_service.wear_item(command) {
        Ok(result) => (StatusCode::OK, Json(OutfitMapper::to_change_response(&result))).into_response(),
        Err(e) => error_response(e),
    }
}
