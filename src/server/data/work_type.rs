use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub struct WorkTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkTypeRepository<'a> {
    /// Creates a new instance of [`WorkTypeRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new work type
    pub async fn create(&self, name: &str) -> Result<entity::work_type::Model, DbErr> {
        let work_type = entity::work_type::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        work_type.insert(self.db).await
    }

    /// Gets a work type by name
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::work_type::Model>, DbErr> {
        entity::prelude::WorkType::find()
            .filter(entity::work_type::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets a work type by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::work_type::Model>, DbErr> {
        entity::prelude::WorkType::find_by_id(id).one(self.db).await
    }

    /// Gets the work types for a set of IDs
    pub async fn find_many_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<Vec<entity::work_type::Model>, DbErr> {
        entity::prelude::WorkType::find()
            .filter(entity::work_type::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}
