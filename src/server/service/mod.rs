//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic on
//! top of the repositories: payload validation, reference resolution,
//! uniqueness checks, audit stamping, and response projections. Services
//! include authentication, email verification, the per-entity lifecycle
//! operations, the job offer workflow, and the read-only searches.

pub mod address;
pub mod auth;
pub mod job;
pub mod material_stock;
pub mod offer;
pub mod owner;
pub mod profession;
pub mod search;
pub mod shop;
pub mod user;
pub mod verification;

use sea_orm::{DatabaseConnection, EntityTrait};

use crate::{
    model::user::UserContactDto,
    server::{
        data::lifecycle::SoftDeleteOutcome,
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
    },
};

/// Maps a soft-delete outcome onto the operation's result.
///
/// A repeated delete is its own failure rather than a silent success.
pub(crate) fn soft_delete_result(
    outcome: SoftDeleteOutcome,
    resource: Resource,
    id: i32,
) -> Result<(), Error> {
    match outcome {
        SoftDeleteOutcome::Deleted => Ok(()),
        SoftDeleteOutcome::AlreadyDeleted => {
            Err(ResourceError::AlreadyDeleted(resource, id).into())
        }
        SoftDeleteOutcome::NotFound => Err(ResourceError::NotFound(resource).into()),
    }
}

/// Loads the contact projection of a referenced user.
///
/// Foreign keys guarantee the row exists, so a miss is a bug rather than a
/// client error. A soft deleted user still projects; the referencing row is
/// the one whose lifecycle matters here.
pub(crate) async fn user_contact(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<UserContactDto, Error> {
    let user = entity::prelude::User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InternalError(format!("Referenced user {user_id} is missing")))?;

    Ok(UserContactDto::from_model(&user))
}
