use entity::address::OwnerKind;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection};

use crate::{
    model::{search::ShopSearchDto, shop::ShopDto},
    server::{
        data::{
            address::AddressRepository, shop::ShopRepository, shop_type::ShopTypeRepository,
        },
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        service::shop::reduced_from,
    },
};

pub struct ShopSearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopSearchService<'a> {
    /// Creates a new instance of [`ShopSearchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches active shops by name, city, or category
    ///
    /// # Behavior
    /// - The filter is decided by exactly which parameters are present; an
    ///   empty query lists every active shop.
    /// - Name and category match exactly; city filters through shop site
    ///   addresses.
    ///
    /// # Returns
    /// - `Ok(Vec<ShopDto>)`: The matching shops with their owner contact
    /// - `Err(Error::ResourceError(ResourceError::NotFound))`: The category
    ///   name is not in the vocabulary
    /// - `Err(Error::ResourceError(ResourceError::NoMatches))`: Nothing
    ///   matched, or the parameter combination is not supported
    pub async fn search(&self, params: &ShopSearchDto) -> Result<Vec<ShopDto>, Error> {
        let condition = match (
            params.name.as_deref(),
            params.city.as_deref(),
            params.category.as_deref(),
        ) {
            (None, None, None) => Condition::all(),
            (None, Some(city), Some(category)) => Condition::all()
                .add(entity::shop::Column::Id.is_in(self.shop_site_ids(city).await?))
                .add(entity::shop::Column::Id.is_in(self.category_ids(category).await?)),
            (Some(name), Some(city), None) => Condition::all()
                .add(entity::shop::Column::Name.eq(name))
                .add(entity::shop::Column::Id.is_in(self.shop_site_ids(city).await?)),
            (Some(name), None, None) => {
                Condition::all().add(entity::shop::Column::Name.eq(name))
            }
            (None, Some(city), None) => Condition::all()
                .add(entity::shop::Column::Id.is_in(self.shop_site_ids(city).await?)),
            _ => return Err(ResourceError::NoMatches(Resource::Shop).into()),
        };

        let shops = ShopRepository::new(self.db)
            .find_active_filtered(condition)
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

    /// Resolves shop ids owning an active shop site address in the city
    async fn shop_site_ids(&self, city: &str) -> Result<Vec<i32>, Error> {
        let ids = AddressRepository::new(self.db)
            .find_active_by_city(OwnerKind::ShopSite, city)
            .await?
            .into_iter()
            .map(|address| address.owner_id)
            .collect();

        Ok(ids)
    }

    async fn category_ids(&self, category: &str) -> Result<Vec<i32>, Error> {
        let shop_type = ShopTypeRepository::new(self.db)
            .find_by_name(category)
            .await?
            .ok_or(ResourceError::NotFound(Resource::ShopType))?;

        let ids = ShopRepository::new(self.db)
            .find_ids_by_category(shop_type.id)
            .await?;

        Ok(ids)
    }
}
