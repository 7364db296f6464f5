use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    /// Creates a new instance of [`RoleRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new role
    pub async fn create(&self, name: &str) -> Result<entity::role::Model, DbErr> {
        let role = entity::role::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        role.insert(self.db).await
    }

    /// Gets a role by name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets every role whose name appears in the list
    ///
    /// Missing names are silently absent from the result; the caller compares
    /// lengths to detect them.
    pub async fn find_many_by_names(
        &self,
        names: &[String],
    ) -> Result<Vec<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::Name.is_in(names.iter().map(String::as_str)))
            .all(self.db)
            .await
    }
}
