//! Resolution of polymorphic address owners.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use entity::address::OwnerKind;

use crate::{
    model::address::OwnerRefDto,
    server::{
        data::lifecycle::LifecycleRepository,
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
    },
};

/// The storage columns and responsible user behind an owner reference.
pub struct ResolvedOwner {
    pub kind: OwnerKind,
    pub owner_id: i32,
    /// The user who answers for the owner, stamped into audit columns.
    pub user_id: i32,
}

/// Capability for resolving polymorphic owner references.
///
/// An address hangs off a house owner's account, a worker's profession, or a
/// shop site. Implementations turn the tagged reference into storage columns
/// and reject references to missing or deleted rows.
#[async_trait]
pub trait OwnerLookup: Send + Sync {
    async fn resolve(&self, owner: OwnerRefDto) -> Result<ResolvedOwner, Error>;
}

/// [`OwnerLookup`] backed by the relational store.
pub struct DbOwnerLookup<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DbOwnerLookup<'a> {
    /// Creates a new instance of [`DbOwnerLookup`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OwnerLookup for DbOwnerLookup<'_> {
    /// Resolves an owner reference against the live rows
    ///
    /// # Behavior
    /// - A home owner reference resolves to the user's own account, so the
    ///   user answers for it directly.
    /// - A work place reference resolves through the profession to the worker
    ///   who registered it.
    /// - A shop site reference resolves through the shop to its owning user.
    /// - References to rows that are missing or soft deleted fail with
    ///   `NotFound` naming the referenced resource.
    async fn resolve(&self, owner: OwnerRefDto) -> Result<ResolvedOwner, Error> {
        match owner {
            OwnerRefDto::HomeOwner(user_id) => {
                let user = LifecycleRepository::<entity::user::Entity>::new(self.db)
                    .get_active(user_id)
                    .await?
                    .ok_or(ResourceError::NotFound(Resource::User))?;

                Ok(ResolvedOwner {
                    kind: OwnerKind::HomeOwner,
                    owner_id: user.id,
                    user_id: user.id,
                })
            }
            OwnerRefDto::WorkPlace(profession_id) => {
                let profession = LifecycleRepository::<entity::profession::Entity>::new(self.db)
                    .get_active(profession_id)
                    .await?
                    .ok_or(ResourceError::NotFound(Resource::Profession))?;

                Ok(ResolvedOwner {
                    kind: OwnerKind::WorkPlace,
                    owner_id: profession.id,
                    user_id: profession.user_id,
                })
            }
            OwnerRefDto::ShopSite(shop_id) => {
                let shop = LifecycleRepository::<entity::shop::Entity>::new(self.db)
                    .get_active(shop_id)
                    .await?
                    .ok_or(ResourceError::NotFound(Resource::Shop))?;

                Ok(ResolvedOwner {
                    kind: OwnerKind::ShopSite,
                    owner_id: shop.id,
                    user_id: shop.user_id,
                })
            }
        }
    }
}
