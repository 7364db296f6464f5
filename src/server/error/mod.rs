//! Error types for the Setu server application.
//!
//! This module provides the error handling system with specialized error types
//! for different domains (authentication, configuration, resource lifecycle,
//! payload validation). All errors implement `IntoResponse` for Axum HTTP
//! responses and use `thiserror` for ergonomic error definitions with automatic
//! `Display` and `Error` trait implementations.

pub mod auth;
pub mod config;
pub mod resource;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, resource::ResourceError,
        validation::ValidationError,
    },
};

/// Main error type for the Setu server application.
///
/// This enum aggregates all domain-specific error types and external library
/// errors into a single unified error type. It uses `thiserror`'s `#[from]`
/// attribute to enable automatic conversion from underlying error types via the
/// `?` operator. The `IntoResponse` implementation maps errors to appropriate
/// HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (bearer tokens, credentials, role checks)
/// - Resource errors (missing rows, repeated deletes, uniqueness conflicts)
/// - Validation errors (rejected payload fields)
/// - External library errors (database)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error (tokens, credentials, roles).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Resource lifecycle error (not found, already deleted, conflict).
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Payload validation error (a field was rejected).
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Internal error indicating a bug in Setu's code.
    ///
    /// This error should never occur in normal operation and indicates a
    /// programming error that needs to be reported as a bug.
    #[error("Internal error with Setu's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error
/// responses. Database and internal errors are treated as internal server
/// errors (500) with logging, while the domain error types carry their own
/// response mappings.
///
/// # Returns
/// - 400 Bad Request - For rejected payload fields
/// - 401 Unauthorized / 403 Forbidden - For authentication failures
/// - 404 Not Found / 409 Conflict - For resource lifecycle failures
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server
/// Error response.
///
/// This struct logs the error message and returns a generic "Internal server
/// error" message to the client to avoid leaking implementation details. Used
/// as a fallback for errors that don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error
/// message to the client to avoid exposing internal implementation details or
/// sensitive information.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                detail: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
