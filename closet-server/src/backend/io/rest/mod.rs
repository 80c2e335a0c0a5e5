//! # REST API Interface Layer
//!
//! HTTP endpoints for the digital closet, nested under `/api`.
//!
//! - `/items`: register, edit, remove and list clothing items
//! - `/outfits`: record what was worn on a date
//! - `/recommendations`: least-worn suggestions
//! - `/views`: cached home/closet/calendar screens and selection changes
//! - `/calendar`: month grids and today's date
//!
//! Domain errors map to status codes in one place: validation problems are
//! 400, unknown ids 404 and failed saves 500. Malformed bodies and query
//! strings count as validation problems (see `extractors`).

pub mod calendar_apis;
pub mod extractors;
pub mod item_apis;
pub mod mappers;
pub mod outfit_apis;
pub mod recommendation_apis;
pub mod view_apis;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;
use shared::ErrorResponse;

use crate::backend::domain::models::ClosetError;

pub fn status_for(error: &ClosetError) -> StatusCode {
    match error {
        ClosetError::Validation(_) => StatusCode::BAD_REQUEST,
        ClosetError::NotFound(_) => StatusCode::NOT_FOUND,
        ClosetError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Translate a domain error into a JSON error response
pub fn error_response(error: ClosetError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        error!("❌ Request failed: {}", error);
    }
    let body = ErrorResponse {
        error: error.kind().to_string(),
        message: error.to_string(),
    };
    (status, Json(body)).into_response()
}
