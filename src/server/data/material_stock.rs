use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::material::CreateMaterialStockDto;

pub struct MaterialStockRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaterialStockRepository<'a> {
    /// Creates a new instance of [`MaterialStockRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new material stock entry
    pub async fn create(
        &self,
        payload: &CreateMaterialStockDto,
        shop_type_id: i32,
        actor_id: i32,
    ) -> Result<entity::material_stock::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let material = entity::material_stock::ActiveModel {
            shop_type_id: ActiveValue::Set(shop_type_id),
            name: ActiveValue::Set(payload.name.clone()),
            stock: ActiveValue::Set(payload.stock.clone()),
            rate: ActiveValue::Set(payload.rate),
            brand: ActiveValue::Set(payload.brand.clone()),
            shop_id: ActiveValue::Set(payload.shop_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(Some(actor_id)),
            updated_by: ActiveValue::Set(Some(actor_id)),
            is_deleted: ActiveValue::Set(false),
            ..Default::default()
        };

        material.insert(self.db).await
    }

    /// Updates a material stock entry, returning Ok(None) when no row exists
    pub async fn update(
        &self,
        material_id: i32,
        payload: &CreateMaterialStockDto,
        shop_type_id: i32,
        actor_id: i32,
    ) -> Result<Option<entity::material_stock::Model>, DbErr> {
        let material = match entity::prelude::MaterialStock::find_by_id(material_id)
            .one(self.db)
            .await?
        {
            Some(material) => material,
            None => return Ok(None),
        };

        let mut material_am = material.into_active_model();
        material_am.shop_type_id = ActiveValue::Set(shop_type_id);
        material_am.name = ActiveValue::Set(payload.name.clone());
        material_am.stock = ActiveValue::Set(payload.stock.clone());
        material_am.rate = ActiveValue::Set(payload.rate);
        material_am.brand = ActiveValue::Set(payload.brand.clone());
        material_am.shop_id = ActiveValue::Set(payload.shop_id);
        material_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());
        material_am.updated_by = ActiveValue::Set(Some(actor_id));

        let material = material_am.update(self.db).await?;

        Ok(Some(material))
    }

    /// Gets active material stock entries matching the given filters
    pub async fn find_active_filtered(
        &self,
        condition: Condition,
    ) -> Result<Vec<entity::material_stock::Model>, DbErr> {
        entity::prelude::MaterialStock::find()
            .filter(entity::material_stock::Column::IsDeleted.eq(false))
            .filter(condition)
            .order_by_asc(entity::material_stock::Column::Id)
            .all(self.db)
            .await
    }
}
