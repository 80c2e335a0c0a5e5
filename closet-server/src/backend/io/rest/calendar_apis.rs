use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::info;
use serde::Deserialize;

use crate::backend::io::rest::error_response;
use crate::backend::io::rest::extractors::ApiQuery;
use crate::backend::AppState;

// Query parameters for calendar month API
#[derive(Debug, Deserialize)]
pub struct CalendarMonthQuery {
    pub month: u32,
    pub year: i32,
}

/// Create a router for calendar related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/month", get(get_calendar_month))
        .route("/current-date", get(get_current_date))
}

/// Month grid with per-day outfit counts
async fn get_calendar_month(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CalendarMonthQuery>,
) -> impl IntoResponse {
    info!("GET /api/calendar/month - query: {:?}", query);

    match state.outfit_service.calendar_month(query.month, query.year) {
        Ok(month) => (StatusCode::OK, Json(month)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn get_current_date(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/current-date");
    (StatusCode::OK, Json(state.outfit_service.current_date())).into_response()
}
