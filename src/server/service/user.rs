use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto, UserRecordDto},
    server::{
        data::{
            lifecycle::LifecycleRepository, role::RoleRepository, user::UserRepository,
            verification::VerificationRepository,
        },
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        service::soft_delete_result,
        util::secret::hash_password,
        validate::{validate_new_user, validate_user_update},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account
    ///
    /// # Behavior
    /// - The payload is validated, then the email must already hold a
    ///   confirmed verification entry.
    /// - Every requested role name must exist; one unknown name fails the
    ///   whole request.
    /// - Username, email, and mobile number must be unused. Soft deleted
    ///   accounts keep their values reserved.
    /// - The password is hashed before the row is written and the requested
    ///   roles are granted to the new account.
    ///
    /// # Returns
    /// - `Ok(UserRecordDto)`: The stored account with its granted role names
    /// - `Err(Error::ValidationError)`: A payload field was rejected
    /// - `Err(Error::ResourceError(ResourceError::EmailNotVerified))`: No
    ///   verification entry exists for the email
    /// - `Err(Error::ResourceError(ResourceError::NotFound))`: A requested
    ///   role name does not exist
    /// - `Err(Error::ResourceError(ResourceError::Conflict))`: Username,
    ///   email, or mobile number already in use
    pub async fn create(&self, payload: &CreateUserDto) -> Result<UserRecordDto, Error> {
        validate_new_user(payload)?;

        if VerificationRepository::new(self.db)
            .find_by_email(&payload.email)
            .await?
            .is_none()
        {
            return Err(ResourceError::EmailNotVerified(payload.email.clone()).into());
        }

        let roles = RoleRepository::new(self.db)
            .find_many_by_names(&payload.roles)
            .await?;
        if roles.len() != payload.roles.len() {
            return Err(ResourceError::NotFound(Resource::Role).into());
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(&payload.username).await?.is_some() {
            return Err(ResourceError::Conflict(
                Resource::User,
                format!("Username {} is already taken", payload.username),
            )
            .into());
        }

        if user_repo.find_by_email(&payload.email).await?.is_some() {
            return Err(ResourceError::Conflict(
                Resource::User,
                format!("Email {} is already registered", payload.email),
            )
            .into());
        }

        if user_repo.find_by_mobile(payload.mobile).await?.is_some() {
            return Err(ResourceError::Conflict(
                Resource::User,
                format!("Mobile number {} is already registered", payload.mobile),
            )
            .into());
        }

        let password_hash = hash_password(&payload.password)?;

        let user = user_repo
            .create(
                payload.username.clone(),
                password_hash,
                payload.name.clone(),
                payload.mobile,
                payload.email.clone(),
            )
            .await?;

        for role in &roles {
            user_repo.assign_role(user.id, role.id).await?;
        }

        let role_names = roles.into_iter().map(|role| role.name).collect();

        Ok(record_from(user, role_names))
    }

    /// Gets an active user by ID as the reduced projection
    pub async fn retrieve(&self, user_id: i32) -> Result<UserDto, Error> {
        let user = LifecycleRepository::<entity::user::Entity>::new(self.db)
            .get_active(user_id)
            .await?
            .ok_or(ResourceError::NotFound(Resource::User))?;

        let roles = UserRepository::new(self.db).get_role_names(user.id).await?;

        Ok(reduced_from(user, roles))
    }

    /// Lists every active user as the reduced projection
    ///
    /// # Returns
    /// - `Ok(Vec<UserDto>)`: Active accounts in insertion order
    /// - `Err(Error::ResourceError(ResourceError::NoMatches))`: No active
    ///   accounts exist
    pub async fn list(&self) -> Result<Vec<UserDto>, Error> {
        let users = LifecycleRepository::<entity::user::Entity>::new(self.db)
            .list_active()
            .await?;

        if users.is_empty() {
            return Err(ResourceError::NoMatches(Resource::User).into());
        }

        let user_repo = UserRepository::new(self.db);

        let mut records = Vec::with_capacity(users.len());
        for user in users {
            let roles = user_repo.get_role_names(user.id).await?;
            records.push(reduced_from(user, roles));
        }

        Ok(records)
    }

    /// Updates an active user's account fields
    ///
    /// # Behavior
    /// - The target must be active; a deleted account stays frozen.
    /// - Username, email, and mobile uniqueness is enforced against every
    ///   other row, the target may keep its own values.
    /// - A password in the payload is rehashed, an omitted one keeps the
    ///   stored hash.
    ///
    /// # Returns
    /// - `Ok(UserRecordDto)`: The updated account with its role names
    /// - `Err(Error::ValidationError)`: A payload field was rejected
    /// - `Err(Error::ResourceError(ResourceError::NotFound))`: No active user
    ///   with the ID exists
    /// - `Err(Error::ResourceError(ResourceError::Conflict))`: Username,
    ///   email, or mobile number taken by another account
    pub async fn update(
        &self,
        user_id: i32,
        payload: &UpdateUserDto,
        actor_id: i32,
    ) -> Result<UserRecordDto, Error> {
        validate_user_update(payload)?;

        let user_repo = UserRepository::new(self.db);

        if LifecycleRepository::<entity::user::Entity>::new(self.db)
            .get_active(user_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::User).into());
        }

        if let Some(other) = user_repo.find_by_username(&payload.username).await? {
            if other.id != user_id {
                return Err(ResourceError::Conflict(
                    Resource::User,
                    format!("Username {} is already taken", payload.username),
                )
                .into());
            }
        }

        if let Some(other) = user_repo.find_by_email(&payload.email).await? {
            if other.id != user_id {
                return Err(ResourceError::Conflict(
                    Resource::User,
                    format!("Email {} is already registered", payload.email),
                )
                .into());
            }
        }

        if let Some(other) = user_repo.find_by_mobile(payload.mobile).await? {
            if other.id != user_id {
                return Err(ResourceError::Conflict(
                    Resource::User,
                    format!("Mobile number {} is already registered", payload.mobile),
                )
                .into());
            }
        }

        let password_hash = match &payload.password {
            Some(plain) => Some(hash_password(plain)?),
            None => None,
        };

        let user = user_repo
            .update(
                user_id,
                payload.username.clone(),
                password_hash,
                payload.name.clone(),
                payload.mobile,
                payload.email.clone(),
                actor_id,
            )
            .await?
            .ok_or(ResourceError::NotFound(Resource::User))?;

        let roles = user_repo.get_role_names(user.id).await?;

        Ok(record_from(user, roles))
    }

    /// Soft deletes an active user
    pub async fn delete(&self, user_id: i32) -> Result<(), Error> {
        let outcome = LifecycleRepository::<entity::user::Entity>::new(self.db)
            .soft_delete(user_id)
            .await?;

        soft_delete_result(outcome, Resource::User, user_id)
    }
}

fn record_from(user: entity::user::Model, roles: Vec<String>) -> UserRecordDto {
    UserRecordDto {
        id: user.id,
        username: user.username,
        name: user.name,
        mobile: user.mobile,
        email: user.email,
        roles,
        created_at: user.created_at,
        updated_at: user.updated_at,
        created_by: user.created_by,
        updated_by: user.updated_by,
        is_deleted: user.is_deleted,
    }
}

pub(crate) fn reduced_from(user: entity::user::Model, roles: Vec<String>) -> UserDto {
    UserDto {
        username: user.username,
        name: user.name,
        email: user.email,
        mobile: user.mobile,
        roles,
    }
}
