use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub struct ShopTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopTypeRepository<'a> {
    /// Creates a new instance of [`ShopTypeRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new shop category
    pub async fn create(&self, name: &str) -> Result<entity::shop_type::Model, DbErr> {
        let shop_type = entity::shop_type::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        shop_type.insert(self.db).await
    }

    /// Gets a shop category by name
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::shop_type::Model>, DbErr> {
        entity::prelude::ShopType::find()
            .filter(entity::shop_type::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets a shop category by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::shop_type::Model>, DbErr> {
        entity::prelude::ShopType::find_by_id(id).one(self.db).await
    }

    /// Gets the shop categories for a set of IDs
    pub async fn find_many_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<Vec<entity::shop_type::Model>, DbErr> {
        entity::prelude::ShopType::find()
            .filter(entity::shop_type::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}
