use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{error::InternalServerError, model::auth::RoleName},
};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authorization header is missing or is not a bearer token")]
    MissingBearerToken,
    #[error("Bearer token was rejected: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
    #[error("User ID {0} from a valid bearer token is missing or deactivated")]
    StaleToken(i32),
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("This operation requires the {0} role")]
    MissingRole(RoleName),
    #[error("Failed to issue bearer token: {0}")]
    TokenIssue(jsonwebtoken::errors::Error),
}

impl AuthError {
    fn unauthorized(detail: &str) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                detail: detail.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingBearerToken | Self::InvalidToken(_) | Self::StaleToken(_) => {
                tracing::debug!("{}", self);

                Self::unauthorized("Authentication required")
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", Self::InvalidCredentials);

                Self::unauthorized("Invalid username or password")
            }
            Self::MissingRole(role) => {
                tracing::debug!(role = %role, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        detail: format!("This operation requires the {} role", role),
                    }),
                )
                    .into_response()
            }
            Self::TokenIssue(_) => InternalServerError(self).into_response(),
        }
    }
}
