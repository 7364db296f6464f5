use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::material::{CreateMaterialStockDto, MaterialStockDto, MaterialStockRecordDto},
    server::{
        data::{
            lifecycle::LifecycleRepository, material_stock::MaterialStockRepository,
            shop_type::ShopTypeRepository,
        },
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        service::soft_delete_result,
        validate::validate_material,
    },
};

pub struct MaterialStockService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaterialStockService<'a> {
    /// Creates a new instance of [`MaterialStockService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a material stock entry
    ///
    /// # Behavior
    /// - The payload is validated, the category name must exist in the
    ///   vocabulary, and the stocking shop must be active.
    ///
    /// # Returns
    /// - `Ok(MaterialStockRecordDto)`: The stored entry with its category name
    /// - `Err(Error::ValidationError)`: A payload field was rejected
    /// - `Err(Error::ResourceError(ResourceError::NotFound))`: Unknown
    ///   category name or missing/deleted shop
    pub async fn create(
        &self,
        payload: &CreateMaterialStockDto,
        actor_id: i32,
    ) -> Result<MaterialStockRecordDto, Error> {
        validate_material(payload)?;

        let shop_type = ShopTypeRepository::new(self.db)
            .find_by_name(&payload.category)
            .await?
            .ok_or(ResourceError::NotFound(Resource::ShopType))?;

        if LifecycleRepository::<entity::shop::Entity>::new(self.db)
            .get_active(payload.shop_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::Shop).into());
        }

        let material = MaterialStockRepository::new(self.db)
            .create(payload, shop_type.id, actor_id)
            .await?;

        Ok(record_from(material, shop_type.name))
    }

    /// Gets an active material stock entry by ID as the reduced projection
    pub async fn retrieve(&self, material_id: i32) -> Result<MaterialStockDto, Error> {
        let material = LifecycleRepository::<entity::material_stock::Entity>::new(self.db)
            .get_active(material_id)
            .await?
            .ok_or(ResourceError::NotFound(Resource::MaterialStock))?;

        let category = ShopTypeRepository::new(self.db)
            .find_by_id(material.shop_type_id)
            .await?
            .map(|shop_type| shop_type.name)
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Shop category {} is missing",
                    material.shop_type_id
                ))
            })?;

        Ok(reduced(material, category))
    }

    /// Lists every active material stock entry as the reduced projection
    pub async fn list(&self) -> Result<Vec<MaterialStockDto>, Error> {
        let materials = LifecycleRepository::<entity::material_stock::Entity>::new(self.db)
            .list_active()
            .await?;

        if materials.is_empty() {
            return Err(ResourceError::NoMatches(Resource::MaterialStock).into());
        }

        reduced_many(self.db, materials).await
    }

    /// Updates an active material stock entry
    pub async fn update(
        &self,
        material_id: i32,
        payload: &CreateMaterialStockDto,
        actor_id: i32,
    ) -> Result<MaterialStockRecordDto, Error> {
        validate_material(payload)?;

        if LifecycleRepository::<entity::material_stock::Entity>::new(self.db)
            .get_active(material_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::MaterialStock).into());
        }

        let shop_type = ShopTypeRepository::new(self.db)
            .find_by_name(&payload.category)
            .await?
            .ok_or(ResourceError::NotFound(Resource::ShopType))?;

        if LifecycleRepository::<entity::shop::Entity>::new(self.db)
            .get_active(payload.shop_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::Shop).into());
        }

        let material = MaterialStockRepository::new(self.db)
            .update(material_id, payload, shop_type.id, actor_id)
            .await?
            .ok_or(ResourceError::NotFound(Resource::MaterialStock))?;

        Ok(record_from(material, shop_type.name))
    }

    /// Soft deletes an active material stock entry
    pub async fn delete(&self, material_id: i32) -> Result<(), Error> {
        let outcome = LifecycleRepository::<entity::material_stock::Entity>::new(self.db)
            .soft_delete(material_id)
            .await?;

        soft_delete_result(outcome, Resource::MaterialStock, material_id)
    }
}

/// Builds reduced projections for a batch, resolving category names once.
pub(crate) async fn reduced_many(
    db: &DatabaseConnection,
    materials: Vec<entity::material_stock::Model>,
) -> Result<Vec<MaterialStockDto>, Error> {
    let type_ids = materials
        .iter()
        .map(|material| material.shop_type_id)
        .collect();

    let names: HashMap<i32, String> = ShopTypeRepository::new(db)
        .find_many_by_ids(type_ids)
        .await?
        .into_iter()
        .map(|shop_type| (shop_type.id, shop_type.name))
        .collect();

    let mut records = Vec::with_capacity(materials.len());
    for material in materials {
        let category = names
            .get(&material.shop_type_id)
            .cloned()
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Shop category {} is missing",
                    material.shop_type_id
                ))
            })?;
        records.push(reduced(material, category));
    }

    Ok(records)
}

fn reduced(material: entity::material_stock::Model, category: String) -> MaterialStockDto {
    MaterialStockDto {
        category,
        name: material.name,
        stock: material.stock,
        rate: material.rate,
        brand: material.brand,
    }
}

fn record_from(material: entity::material_stock::Model, category: String) -> MaterialStockRecordDto {
    MaterialStockRecordDto {
        id: material.id,
        category,
        name: material.name,
        stock: material.stock,
        rate: material.rate,
        brand: material.brand,
        shop_id: material.shop_id,
        created_at: material.created_at,
        updated_at: material.updated_at,
        created_by: material.created_by,
        updated_by: material.updated_by,
        is_deleted: material.is_deleted,
    }
}
