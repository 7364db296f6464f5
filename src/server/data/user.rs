use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// The password must already be hashed. Registration is self-service, so
    /// the audit stamps point at the created row's own ID.
    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        name: String,
        mobile: i64,
        email: String,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            password: ActiveValue::Set(password_hash),
            name: ActiveValue::Set(name),
            mobile: ActiveValue::Set(mobile),
            email: ActiveValue::Set(email),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            is_deleted: ActiveValue::Set(false),
            ..Default::default()
        };

        let user = user.insert(self.db).await?;

        let user_id = user.id;
        let mut user_am = user.into_active_model();
        user_am.created_by = ActiveValue::Set(Some(user_id));
        user_am.updated_by = ActiveValue::Set(Some(user_id));

        user_am.update(self.db).await
    }

    /// Grants a role to a user
    pub async fn assign_role(
        &self,
        user_id: i32,
        role_id: i32,
    ) -> Result<entity::user_role::Model, DbErr> {
        let user_role = entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role_id: ActiveValue::Set(role_id),
            ..Default::default()
        };

        user_role.insert(self.db).await
    }

    /// Gets the names of every role granted to a user
    pub async fn get_role_names(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(Vec::new()),
        };

        let roles = user.find_related(entity::role::Entity).all(self.db).await?;

        Ok(roles.into_iter().map(|role| role.name).collect())
    }

    /// Gets a user by username, soft-deleted rows included
    ///
    /// Deleted users keep their username, so uniqueness checks must see them.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Gets a user by email, soft-deleted rows included
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets a user by mobile number, soft-deleted rows included
    pub async fn find_by_mobile(&self, mobile: i64) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Mobile.eq(mobile))
            .one(self.db)
            .await
    }

    /// Updates a user's account fields
    ///
    /// A None password keeps the stored hash. Returns Ok(None) when no row
    /// with the ID exists.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        user_id: i32,
        username: String,
        password_hash: Option<String>,
        name: String,
        mobile: i64,
        email: String,
        actor_id: i32,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.username = ActiveValue::Set(username);
        if let Some(password_hash) = password_hash {
            user_am.password = ActiveValue::Set(password_hash);
        }
        user_am.name = ActiveValue::Set(name);
        user_am.mobile = ActiveValue::Set(mobile);
        user_am.email = ActiveValue::Set(email);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());
        user_am.updated_by = ActiveValue::Set(Some(actor_id));

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
