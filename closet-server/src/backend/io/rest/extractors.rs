//! Request extractors whose rejections use the JSON error body.
//!
//! A body or query string that does not deserialize (missing `item_id`,
//! `limit=abc`, no `month`) is a validation error like any other.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    response::{IntoResponse, Response},
};

use crate::backend::domain::models::ClosetError;
use crate::backend::io::rest::error_response;

/// JSON request body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(RejectedRequest))]
pub struct ApiJson<T>(pub T);

/// Query string parameters
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(RejectedRequest))]
pub struct ApiQuery<T>(pub T);

#[derive(Debug)]
pub struct RejectedRequest(ClosetError);

impl From<JsonRejection> for RejectedRequest {
    fn from(rejection: JsonRejection) -> Self {
        Self(ClosetError::validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for RejectedRequest {
    fn from(rejection: QueryRejection) -> Self {
        Self(ClosetError::validation(rejection.body_text()))
    }
}

impl IntoResponse for RejectedRequest {
    fn into_response(self) -> Response {
        error_response(self.0)
    }
}
