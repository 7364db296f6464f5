use sea_orm::{ColumnTrait, Condition, DatabaseConnection};

use crate::{
    model::{material::MaterialStockDto, search::MaterialSearchDto},
    server::{
        data::{material_stock::MaterialStockRepository, shop_type::ShopTypeRepository},
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        service::material_stock::reduced_many,
    },
};

pub struct MaterialSearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaterialSearchService<'a> {
    /// Creates a new instance of [`MaterialSearchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches active material stock by category, brand, or name
    ///
    /// Unlike the other searches, every combination of the three parameters
    /// is supported; present fields combine conjunctively and all match
    /// exactly. An empty query lists every active entry.
    ///
    /// # Returns
    /// - `Ok(Vec<MaterialStockDto>)`: The matching stock entries
    /// - `Err(Error::ResourceError(ResourceError::NotFound))`: The category
    ///   name is not in the vocabulary
    /// - `Err(Error::ResourceError(ResourceError::NoMatches))`: Nothing
    ///   matched
    pub async fn search(
        &self,
        params: &MaterialSearchDto,
    ) -> Result<Vec<MaterialStockDto>, Error> {
        let mut condition = Condition::all();

        if let Some(category) = params.category.as_deref() {
            let shop_type = ShopTypeRepository::new(self.db)
                .find_by_name(category)
                .await?
                .ok_or(ResourceError::NotFound(Resource::ShopType))?;

            condition = condition.add(entity::material_stock::Column::ShopTypeId.eq(shop_type.id));
        }

        if let Some(brand) = params.brand.as_deref() {
            condition = condition.add(entity::material_stock::Column::Brand.eq(brand));
        }

        if let Some(name) = params.name.as_deref() {
            condition = condition.add(entity::material_stock::Column::Name.eq(name));
        }

        let materials = MaterialStockRepository::new(self.db)
            .find_active_filtered(condition)
            .await?;

        if materials.is_empty() {
            return Err(ResourceError::NoMatches(Resource::MaterialStock).into());
        }

        reduced_many(self.db, materials).await
    }
}

#[cfg(test)]
mod tests {
    use crate::model::search::MaterialSearchDto;

    fn empty_params() -> MaterialSearchDto {
        MaterialSearchDto {
            category: None,
            brand: None,
            name: None,
        }
    }

    mod search {
        use setu_test_utils::prelude::*;

        use crate::server::{
            error::{
                resource::{Resource, ResourceError},
                Error,
            },
            service::search::material::{tests::empty_params, MaterialSearchService},
        };

        /// Expect an empty query to list every active entry
        #[tokio::test]
        async fn lists_all_without_params() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::ShopType,
                entity::prelude::User,
                entity::prelude::Shop,
                entity::prelude::MaterialStock
            )?;
            let raw = factory::insert_shop_type(&test.state.db, "Raw Material").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let shop = factory::insert_shop(&test.state.db, "Sharma Traders", user.id).await?;
            factory::insert_material(&test.state.db, raw.id, shop.id, "Cement", "UltraTech")
                .await?;
            factory::insert_material(&test.state.db, raw.id, shop.id, "Sand", "Local").await?;

            let service = MaterialSearchService::new(&test.state.db);
            let records = service.search(&empty_params()).await.unwrap();

            assert_eq!(records.len(), 2);

            Ok(())
        }

        /// Expect category, brand, and name to combine conjunctively
        #[tokio::test]
        async fn combines_all_three_fields() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::ShopType,
                entity::prelude::User,
                entity::prelude::Shop,
                entity::prelude::MaterialStock
            )?;
            let raw = factory::insert_shop_type(&test.state.db, "Raw Material").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let shop = factory::insert_shop(&test.state.db, "Sharma Traders", user.id).await?;
            factory::insert_material(&test.state.db, raw.id, shop.id, "Cement", "UltraTech")
                .await?;
            factory::insert_material(&test.state.db, raw.id, shop.id, "Cement", "Birla").await?;

            let mut params = empty_params();
            params.category = Some("Raw Material".to_string());
            params.name = Some("Cement".to_string());
            params.brand = Some("Birla".to_string());

            let service = MaterialSearchService::new(&test.state.db);
            let records = service.search(&params).await.unwrap();

            assert_eq!(records.len(), 1);
            assert_eq!(records[0].brand, "Birla");

            Ok(())
        }

        /// Expect the brand filter alone to narrow the results
        #[tokio::test]
        async fn filters_by_brand() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::ShopType,
                entity::prelude::User,
                entity::prelude::Shop,
                entity::prelude::MaterialStock
            )?;
            let raw = factory::insert_shop_type(&test.state.db, "Raw Material").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let shop = factory::insert_shop(&test.state.db, "Sharma Traders", user.id).await?;
            factory::insert_material(&test.state.db, raw.id, shop.id, "Cement", "UltraTech")
                .await?;
            factory::insert_material(&test.state.db, raw.id, shop.id, "Sand", "Local").await?;

            let mut params = empty_params();
            params.brand = Some("Local".to_string());

            let service = MaterialSearchService::new(&test.state.db);
            let records = service.search(&params).await.unwrap();

            assert_eq!(records.len(), 1);
            assert_eq!(records[0].name, "Sand");

            Ok(())
        }

        /// Expect NotFound when the category name is unknown
        #[tokio::test]
        async fn fails_for_unknown_category() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::ShopType,
                entity::prelude::User,
                entity::prelude::Shop,
                entity::prelude::MaterialStock
            )?;

            let mut params = empty_params();
            params.category = Some("Alchemy".to_string());

            let service = MaterialSearchService::new(&test.state.db);
            let result = service.search(&params).await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::NotFound(
                    Resource::ShopType
                )))
            ));

            Ok(())
        }

        /// Expect NoMatches when nothing carries the requested name
        #[tokio::test]
        async fn fails_when_nothing_matches() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::ShopType,
                entity::prelude::User,
                entity::prelude::Shop,
                entity::prelude::MaterialStock
            )?;
            let raw = factory::insert_shop_type(&test.state.db, "Raw Material").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let shop = factory::insert_shop(&test.state.db, "Sharma Traders", user.id).await?;
            factory::insert_material(&test.state.db, raw.id, shop.id, "Cement", "UltraTech")
                .await?;

            let mut params = empty_params();
            params.name = Some("Gravel".to_string());

            let service = MaterialSearchService::new(&test.state.db);
            let result = service.search(&params).await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::NoMatches(
                    Resource::MaterialStock
                )))
            ));

            Ok(())
        }
    }
}
