use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// The kinds of rows the lifecycle and search services operate on.
///
/// Carried inside [`ResourceError`] so failure responses and logs name the
/// resource they are about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Role,
    Verification,
    Address,
    Shop,
    ShopType,
    MaterialStock,
    Profession,
    WorkType,
    Job,
    Applicant,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::User => "user",
            Self::Role => "role",
            Self::Verification => "verification entry",
            Self::Address => "address",
            Self::Shop => "shop",
            Self::ShopType => "shop category",
            Self::MaterialStock => "material stock",
            Self::Profession => "profession",
            Self::WorkType => "work type",
            Self::Job => "job",
            Self::Applicant => "applicant",
        };

        write!(f, "{}", name)
    }
}

#[derive(Error, Debug)]
pub enum ResourceError {
    /// The referenced row does not exist or is soft deleted.
    #[error("{0} not found")]
    NotFound(Resource),
    /// A listing or search produced no rows.
    #[error("No {0} matched the request")]
    NoMatches(Resource),
    /// The row was already soft deleted by an earlier request.
    #[error("{0} with ID {1} has already been deleted")]
    AlreadyDeleted(Resource, i32),
    /// A uniqueness invariant would be violated.
    #[error("{1}")]
    Conflict(Resource, String),
    /// Account creation was attempted for an email without a verification entry.
    #[error("Email {0} has not been verified")]
    EmailNotVerified(String),
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_)
            | Self::NoMatches(_)
            | Self::AlreadyDeleted(_, _)
            | Self::EmailNotVerified(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_, _) => StatusCode::CONFLICT,
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
