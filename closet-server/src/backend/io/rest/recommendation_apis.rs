use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::info;
use serde::Deserialize;

use crate::backend::io::rest::extractors::ApiQuery;
use crate::backend::io::rest::mappers::ItemMapper;
use crate::backend::AppState;
use shared::RecommendationsResponse;

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub limit: Option<usize>,
}

/// Create a router for recommendation APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_recommendations))
}

async fn get_recommendations(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RecommendationParams>,
) -> impl IntoResponse {
    info!("GET /api/recommendations - query: {:?}", params);

    let items = state.recommendation_service.recommend(params.limit);
    let response = RecommendationsResponse {
        items: items.iter().map(ItemMapper::to_dto).collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}
