use sea_orm::DatabaseConnection;

use crate::{
    model::shop::{CreateShopDto, ShopDto, ShopRecordDto},
    server::{
        data::{
            lifecycle::LifecycleRepository, shop::ShopRepository, shop_type::ShopTypeRepository,
        },
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        service::{soft_delete_result, user_contact},
        validate::validate_shop,
    },
};

pub struct ShopService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopService<'a> {
    /// Creates a new instance of [`ShopService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a shop linked to its category
    ///
    /// # Behavior
    /// - The payload is validated, the category name must exist in the
    ///   vocabulary, and the owning user must be active.
    /// - The shop row and its category link are written together; audit
    ///   stamps point at the acting user.
    ///
    /// # Returns
    /// - `Ok(ShopRecordDto)`: The stored shop with its category names
    /// - `Err(Error::ValidationError)`: A payload field was rejected
    /// - `Err(Error::ResourceError(ResourceError::NotFound))`: Unknown
    ///   category name or missing/deleted owning user
    pub async fn create(
        &self,
        payload: &CreateShopDto,
        actor_id: i32,
    ) -> Result<ShopRecordDto, Error> {
        validate_shop(payload)?;

        let shop_type = ShopTypeRepository::new(self.db)
            .find_by_name(&payload.category)
            .await?
            .ok_or(ResourceError::NotFound(Resource::ShopType))?;

        if LifecycleRepository::<entity::user::Entity>::new(self.db)
            .get_active(payload.user_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::User).into());
        }

        let shop_repo = ShopRepository::new(self.db);
        let shop = shop_repo.create(payload, shop_type.id, actor_id).await?;
        let categories = shop_repo.categories(&shop).await?;

        Ok(record_from(shop, categories))
    }

    /// Gets an active shop by ID as the reduced projection
    pub async fn retrieve(&self, shop_id: i32) -> Result<ShopDto, Error> {
        let shop = LifecycleRepository::<entity::shop::Entity>::new(self.db)
            .get_active(shop_id)
            .await?
            .ok_or(ResourceError::NotFound(Resource::Shop))?;

        reduced_from(self.db, shop).await
    }

    /// Lists every active shop as the reduced projection
    pub async fn list(&self) -> Result<Vec<ShopDto>, Error> {
        let shops = LifecycleRepository::<entity::shop::Entity>::new(self.db)
            .list_active()
            .await?;

        if shops.is_empty() {
            return Err(ResourceError::NoMatches(Resource::Shop).into());
        }

        let mut records = Vec::with_capacity(shops.len());
        for shop in shops {
            records.push(reduced_from(self.db, shop).await?);
        }

        Ok(records)
    }

    /// Updates an active shop and repoints its category link
    pub async fn update(
        &self,
        shop_id: i32,
        payload: &CreateShopDto,
        actor_id: i32,
    ) -> Result<ShopRecordDto, Error> {
        validate_shop(payload)?;

        if LifecycleRepository::<entity::shop::Entity>::new(self.db)
            .get_active(shop_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::Shop).into());
        }

        let shop_type = ShopTypeRepository::new(self.db)
            .find_by_name(&payload.category)
            .await?
            .ok_or(ResourceError::NotFound(Resource::ShopType))?;

        if LifecycleRepository::<entity::user::Entity>::new(self.db)
            .get_active(payload.user_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::User).into());
        }

        let shop_repo = ShopRepository::new(self.db);
        let shop = shop_repo
            .update(shop_id, payload, shop_type.id, actor_id)
            .await?
            .ok_or(ResourceError::NotFound(Resource::Shop))?;
        let categories = shop_repo.categories(&shop).await?;

        Ok(record_from(shop, categories))
    }

    /// Soft deletes an active shop
    pub async fn delete(&self, shop_id: i32) -> Result<(), Error> {
        let outcome = LifecycleRepository::<entity::shop::Entity>::new(self.db)
            .soft_delete(shop_id)
            .await?;

        soft_delete_result(outcome, Resource::Shop, shop_id)
    }
}

/// Builds the reduced projection with owner contact and category names.
pub(crate) async fn reduced_from(
    db: &DatabaseConnection,
    shop: entity::shop::Model,
) -> Result<ShopDto, Error> {
    let categories = ShopRepository::new(db).categories(&shop).await?;
    let owner = user_contact(db, shop.user_id).await?;

    Ok(ShopDto {
        name: shop.name,
        owner,
        email: shop.email,
        telephone: shop.telephone,
        mobile: shop.mobile,
        invented_year: shop.invented_year,
        categories,
    })
}

fn record_from(shop: entity::shop::Model, categories: Vec<String>) -> ShopRecordDto {
    ShopRecordDto {
        id: shop.id,
        name: shop.name,
        invented_year: shop.invented_year,
        email: shop.email,
        telephone: shop.telephone,
        mobile: shop.mobile,
        user_id: shop.user_id,
        categories,
        created_at: shop.created_at,
        updated_at: shop.updated_at,
        created_by: shop.created_by,
        updated_by: shop.updated_by,
        is_deleted: shop.is_deleted,
    }
}
