//! # REST API for Screen Views
//!
//! Serves the cached home, closet and calendar view models and accepts the
//! selection changes that drive them.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::info;

use crate::backend::io::rest::error_response;
use crate::backend::io::rest::extractors::ApiJson;
use crate::backend::AppState;
use shared::{ClosetFilterRequest, SelectDateRequest};

/// Create a router for view related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(get_home))
        .route("/closet", get(get_closet))
        .route("/calendar", get(get_calendar))
        .route("/selected-date", post(select_date))
        .route("/closet-filter", post(set_closet_filter))
}

async fn get_home(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/views/home");
    (StatusCode::OK, Json(state.view_service.home())).into_response()
}

async fn get_closet(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/views/closet");
    (StatusCode::OK, Json(state.view_service.closet())).into_response()
}

async fn get_calendar(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/views/calendar");
    (StatusCode::OK, Json(state.view_service.calendar())).into_response()
}

async fn select_date(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SelectDateRequest>,
) -> impl IntoResponse {
    info!("POST /api/views/selected-date - date: {}", request.date);

    match state.view_service.select_date(&request.date) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn set_closet_filter(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ClosetFilterRequest>,
) -> impl IntoResponse {
    info!("POST /api/views/closet-filter - request: {:?}", request);

    match state
        .view_service
        .set_closet_filter(request.category.as_deref(), request.sort.as_deref())
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => error_response(e),
    }
}
