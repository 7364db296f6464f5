use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::shop::CreateShopDto;

pub struct ShopRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopRepository<'a> {
    /// Creates a new instance of [`ShopRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new shop linked to its category
    pub async fn create(
        &self,
        payload: &CreateShopDto,
        shop_type_id: i32,
        actor_id: i32,
    ) -> Result<entity::shop::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let shop = entity::shop::ActiveModel {
            name: ActiveValue::Set(payload.name.clone()),
            invented_year: ActiveValue::Set(payload.invented_year),
            email: ActiveValue::Set(payload.email.clone()),
            telephone: ActiveValue::Set(payload.telephone.clone()),
            mobile: ActiveValue::Set(payload.mobile),
            user_id: ActiveValue::Set(payload.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(Some(actor_id)),
            updated_by: ActiveValue::Set(Some(actor_id)),
            is_deleted: ActiveValue::Set(false),
            ..Default::default()
        };

        let shop = shop.insert(self.db).await?;

        let link = entity::shop_category::ActiveModel {
            shop_id: ActiveValue::Set(shop.id),
            shop_type_id: ActiveValue::Set(shop_type_id),
            ..Default::default()
        };
        link.insert(self.db).await?;

        Ok(shop)
    }

    /// Updates a shop and repoints its category link
    ///
    /// Returns Ok(None) when no row with the ID exists.
    pub async fn update(
        &self,
        shop_id: i32,
        payload: &CreateShopDto,
        shop_type_id: i32,
        actor_id: i32,
    ) -> Result<Option<entity::shop::Model>, DbErr> {
        let shop = match entity::prelude::Shop::find_by_id(shop_id).one(self.db).await? {
            Some(shop) => shop,
            None => return Ok(None),
        };

        let mut shop_am = shop.into_active_model();
        shop_am.name = ActiveValue::Set(payload.name.clone());
        shop_am.invented_year = ActiveValue::Set(payload.invented_year);
        shop_am.email = ActiveValue::Set(payload.email.clone());
        shop_am.telephone = ActiveValue::Set(payload.telephone.clone());
        shop_am.mobile = ActiveValue::Set(payload.mobile);
        shop_am.user_id = ActiveValue::Set(payload.user_id);
        shop_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());
        shop_am.updated_by = ActiveValue::Set(Some(actor_id));

        let shop = shop_am.update(self.db).await?;

        entity::prelude::ShopCategory::delete_many()
            .filter(entity::shop_category::Column::ShopId.eq(shop.id))
            .exec(self.db)
            .await?;

        let link = entity::shop_category::ActiveModel {
            shop_id: ActiveValue::Set(shop.id),
            shop_type_id: ActiveValue::Set(shop_type_id),
            ..Default::default()
        };
        link.insert(self.db).await?;

        Ok(Some(shop))
    }

    /// Gets the category names linked to a shop
    pub async fn categories(&self, shop: &entity::shop::Model) -> Result<Vec<String>, DbErr> {
        let types = shop
            .find_related(entity::shop_type::Entity)
            .all(self.db)
            .await?;

        Ok(types.into_iter().map(|shop_type| shop_type.name).collect())
    }

    /// Gets active shops matching the given filters, in insertion order
    pub async fn find_active_filtered(
        &self,
        condition: Condition,
    ) -> Result<Vec<entity::shop::Model>, DbErr> {
        entity::prelude::Shop::find()
            .filter(entity::shop::Column::IsDeleted.eq(false))
            .filter(condition)
            .order_by_asc(entity::shop::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the IDs of shops linked to a category
    pub async fn find_ids_by_category(&self, shop_type_id: i32) -> Result<Vec<i32>, DbErr> {
        let links: Vec<i32> = entity::prelude::ShopCategory::find()
            .select_only()
            .column(entity::shop_category::Column::ShopId)
            .filter(entity::shop_category::Column::ShopTypeId.eq(shop_type_id))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(links)
    }
}
