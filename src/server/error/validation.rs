use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A payload field that failed validation.
///
/// Validation stops at the first failing field, so one request produces at
/// most one of these.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(field = %self.field, "{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                detail: self.message,
            }),
        )
            .into_response()
    }
}
