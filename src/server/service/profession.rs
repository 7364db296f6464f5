use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::profession::{CreateProfessionDto, ProfessionDto, ProfessionRecordDto},
    server::{
        data::{
            lifecycle::LifecycleRepository, profession::ProfessionRepository,
            work_type::WorkTypeRepository,
        },
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        service::{soft_delete_result, user_contact},
        validate::validate_profession,
    },
};

pub struct ProfessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfessionService<'a> {
    /// Creates a new instance of [`ProfessionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a worker's profession
    ///
    /// # Behavior
    /// - The payload is validated, the profession name must exist in the work
    ///   type vocabulary, and the worker must be an active user.
    /// - Availability defaults to true when the payload leaves it out.
    ///
    /// # Returns
    /// - `Ok(ProfessionRecordDto)`: The stored entry with its work type name
    /// - `Err(Error::ValidationError)`: A payload field was rejected
    /// - `Err(Error::ResourceError(ResourceError::NotFound))`: Unknown work
    ///   type name or missing/deleted worker
    pub async fn create(
        &self,
        payload: &CreateProfessionDto,
        actor_id: i32,
    ) -> Result<ProfessionRecordDto, Error> {
        validate_profession(payload)?;

        let work_type = WorkTypeRepository::new(self.db)
            .find_by_name(&payload.profession)
            .await?
            .ok_or(ResourceError::NotFound(Resource::WorkType))?;

        if LifecycleRepository::<entity::user::Entity>::new(self.db)
            .get_active(payload.user_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::User).into());
        }

        let profession = ProfessionRepository::new(self.db)
            .create(payload, work_type.id, actor_id)
            .await?;

        Ok(record_from(profession, work_type.name))
    }

    /// Gets an active profession by ID as the reduced projection
    pub async fn retrieve(&self, profession_id: i32) -> Result<ProfessionDto, Error> {
        let profession = LifecycleRepository::<entity::profession::Entity>::new(self.db)
            .get_active(profession_id)
            .await?
            .ok_or(ResourceError::NotFound(Resource::Profession))?;

        let work_type = WorkTypeRepository::new(self.db)
            .find_by_id(profession.work_type_id)
            .await?
            .map(|work_type| work_type.name)
            .ok_or_else(|| {
                Error::InternalError(format!("Work type {} is missing", profession.work_type_id))
            })?;

        let user = user_contact(self.db, profession.user_id).await?;

        Ok(reduced(profession, work_type, user))
    }

    /// Lists every active profession as the reduced projection
    pub async fn list(&self) -> Result<Vec<ProfessionDto>, Error> {
        let professions = LifecycleRepository::<entity::profession::Entity>::new(self.db)
            .list_active()
            .await?;

        if professions.is_empty() {
            return Err(ResourceError::NoMatches(Resource::Profession).into());
        }

        reduced_many(self.db, professions).await
    }

    /// Updates an active profession
    ///
    /// An omitted availability flag keeps the stored value rather than
    /// resetting it.
    pub async fn update(
        &self,
        profession_id: i32,
        payload: &CreateProfessionDto,
        actor_id: i32,
    ) -> Result<ProfessionRecordDto, Error> {
        validate_profession(payload)?;

        if LifecycleRepository::<entity::profession::Entity>::new(self.db)
            .get_active(profession_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::Profession).into());
        }

        let work_type = WorkTypeRepository::new(self.db)
            .find_by_name(&payload.profession)
            .await?
            .ok_or(ResourceError::NotFound(Resource::WorkType))?;

        if LifecycleRepository::<entity::user::Entity>::new(self.db)
            .get_active(payload.user_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::User).into());
        }

        let profession = ProfessionRepository::new(self.db)
            .update(profession_id, payload, work_type.id, actor_id)
            .await?
            .ok_or(ResourceError::NotFound(Resource::Profession))?;

        Ok(record_from(profession, work_type.name))
    }

    /// Soft deletes an active profession
    pub async fn delete(&self, profession_id: i32) -> Result<(), Error> {
        let outcome = LifecycleRepository::<entity::profession::Entity>::new(self.db)
            .soft_delete(profession_id)
            .await?;

        soft_delete_result(outcome, Resource::Profession, profession_id)
    }
}

/// Builds reduced projections for a batch, resolving work type names once.
pub(crate) async fn reduced_many(
    db: &DatabaseConnection,
    professions: Vec<entity::profession::Model>,
) -> Result<Vec<ProfessionDto>, Error> {
    let names = work_type_names(db, &professions).await?;

    let mut records = Vec::with_capacity(professions.len());
    for profession in professions {
        let work_type = names
            .get(&profession.work_type_id)
            .cloned()
            .ok_or_else(|| {
                Error::InternalError(format!("Work type {} is missing", profession.work_type_id))
            })?;
        let user = user_contact(db, profession.user_id).await?;
        records.push(reduced(profession, work_type, user));
    }

    Ok(records)
}

/// Resolves the work type names referenced by a batch of professions.
pub(crate) async fn work_type_names(
    db: &DatabaseConnection,
    professions: &[entity::profession::Model],
) -> Result<HashMap<i32, String>, Error> {
    let ids = professions
        .iter()
        .map(|profession| profession.work_type_id)
        .collect();

    let names = WorkTypeRepository::new(db)
        .find_many_by_ids(ids)
        .await?
        .into_iter()
        .map(|work_type| (work_type.id, work_type.name))
        .collect();

    Ok(names)
}

fn reduced(
    profession: entity::profession::Model,
    work_type: String,
    user: crate::model::user::UserContactDto,
) -> ProfessionDto {
    ProfessionDto {
        user,
        profession: work_type,
        work_experience: profession.work_experience,
        expected_salary: profession.expected_salary,
        gender: profession.gender,
    }
}

fn record_from(profession: entity::profession::Model, work_type: String) -> ProfessionRecordDto {
    ProfessionRecordDto {
        id: profession.id,
        profession: work_type,
        work_experience: profession.work_experience,
        expected_salary: profession.expected_salary,
        is_available: profession.is_available,
        gender: profession.gender,
        user_id: profession.user_id,
        created_at: profession.created_at,
        updated_at: profession.updated_at,
        created_by: profession.created_by,
        updated_by: profession.updated_by,
        is_deleted: profession.is_deleted,
    }
}

#[cfg(test)]
mod tests {
    use crate::model::profession::CreateProfessionDto;

    fn profession_payload(name: &str, user_id: i32) -> CreateProfessionDto {
        CreateProfessionDto {
            profession: name.to_string(),
            work_experience: 5.0,
            expected_salary: 1500,
            gender: "Male".to_string(),
            user_id,
            is_available: None,
        }
    }

    mod create {
        use setu_test_utils::prelude::*;

        use crate::server::{
            data::lifecycle::LifecycleRepository,
            error::{
                resource::{Resource, ResourceError},
                validation::ValidationError,
                Error,
            },
            service::profession::{tests::profession_payload, ProfessionService},
        };

        /// Expect the entry to be stored with availability defaulted
        #[tokio::test]
        async fn creates_profession() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Profession
            )?;
            factory::insert_work_type(&test.state.db, "Plumber").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;

            let service = ProfessionService::new(&test.state.db);
            let result = service
                .create(&profession_payload("Plumber", user.id), user.id)
                .await;

            assert!(result.is_ok());
            let record = result.unwrap();

            assert_eq!(record.profession, "Plumber");
            assert!(record.is_available);
            assert_eq!(record.created_by, Some(user.id));

            Ok(())
        }

        /// Expect NotFound when the profession name is not a work type
        #[tokio::test]
        async fn fails_for_unknown_work_type() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Profession
            )?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;

            let service = ProfessionService::new(&test.state.db);
            let result = service
                .create(&profession_payload("Alchemist", user.id), user.id)
                .await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::NotFound(
                    Resource::WorkType
                )))
            ));

            Ok(())
        }

        /// Expect NotFound when the worker was soft deleted
        #[tokio::test]
        async fn fails_for_deleted_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Profession
            )?;
            factory::insert_work_type(&test.state.db, "Plumber").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;

            LifecycleRepository::<entity::user::Entity>::new(&test.state.db)
                .soft_delete(user.id)
                .await?;

            let service = ProfessionService::new(&test.state.db);
            let result = service
                .create(&profession_payload("Plumber", user.id), user.id)
                .await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::NotFound(
                    Resource::User
                )))
            ));

            Ok(())
        }

        /// Expect rejection for forty or more years of experience
        #[tokio::test]
        async fn rejects_excessive_experience() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Profession
            )?;
            factory::insert_work_type(&test.state.db, "Plumber").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;

            let mut payload = profession_payload("Plumber", user.id);
            payload.work_experience = 45.0;

            let service = ProfessionService::new(&test.state.db);
            let result = service.create(&payload, user.id).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError { .. }))
            ));

            Ok(())
        }
    }

    mod retrieve {
        use setu_test_utils::prelude::*;

        use crate::server::{
            data::lifecycle::LifecycleRepository,
            error::{
                resource::{Resource, ResourceError},
                Error,
            },
            service::profession::ProfessionService,
        };

        /// Expect the worker's contact and work type name to be embedded
        #[tokio::test]
        async fn embeds_user_contact() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Profession
            )?;
            let work_type = factory::insert_work_type(&test.state.db, "Plumber").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let profession =
                factory::insert_profession(&test.state.db, work_type.id, user.id).await?;

            let service = ProfessionService::new(&test.state.db);
            let result = service.retrieve(profession.id).await;

            assert!(result.is_ok());
            let record = result.unwrap();

            assert_eq!(record.profession, "Plumber");
            assert_eq!(record.user.email, "a@example.com");

            Ok(())
        }

        /// Expect NotFound for a soft deleted profession
        #[tokio::test]
        async fn fails_for_deleted_profession() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Profession
            )?;
            let work_type = factory::insert_work_type(&test.state.db, "Plumber").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let profession =
                factory::insert_profession(&test.state.db, work_type.id, user.id).await?;

            LifecycleRepository::<entity::profession::Entity>::new(&test.state.db)
                .soft_delete(profession.id)
                .await?;

            let service = ProfessionService::new(&test.state.db);
            let result = service.retrieve(profession.id).await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::NotFound(
                    Resource::Profession
                )))
            ));

            Ok(())
        }
    }

    mod list {
        use setu_test_utils::prelude::*;

        use crate::server::{
            error::{
                resource::{Resource, ResourceError},
                Error,
            },
            service::profession::ProfessionService,
        };

        /// Expect NoMatches when no professions exist
        #[tokio::test]
        async fn fails_when_no_professions() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Profession
            )?;

            let service = ProfessionService::new(&test.state.db);
            let result = service.list().await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::NoMatches(
                    Resource::Profession
                )))
            ));

            Ok(())
        }
    }

    mod update {
        use setu_test_utils::prelude::*;

        use crate::server::service::profession::{tests::profession_payload, ProfessionService};

        /// Expect the work type to repoint and updated_by to be restamped
        #[tokio::test]
        async fn moves_to_new_work_type() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Profession
            )?;
            let plumber = factory::insert_work_type(&test.state.db, "Plumber").await?;
            factory::insert_work_type(&test.state.db, "Electrician").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let profession =
                factory::insert_profession(&test.state.db, plumber.id, user.id).await?;

            let service = ProfessionService::new(&test.state.db);
            let result = service
                .update(profession.id, &profession_payload("Electrician", user.id), user.id)
                .await;

            assert!(result.is_ok());
            let record = result.unwrap();

            assert_eq!(record.profession, "Electrician");
            assert_eq!(record.updated_by, Some(user.id));

            Ok(())
        }

        /// Expect an omitted availability flag to keep the stored value
        #[tokio::test]
        async fn preserves_availability_when_omitted() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Profession
            )?;
            let work_type = factory::insert_work_type(&test.state.db, "Plumber").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let profession = factory::insert_profession_with(
                &test.state.db,
                work_type.id,
                user.id,
                1200,
                false,
            )
            .await?;

            let service = ProfessionService::new(&test.state.db);
            let record = service
                .update(profession.id, &profession_payload("Plumber", user.id), user.id)
                .await
                .unwrap();

            assert!(!record.is_available);

            Ok(())
        }
    }

    mod delete {
        use setu_test_utils::prelude::*;

        use crate::server::{
            error::{
                resource::{Resource, ResourceError},
                Error,
            },
            service::profession::ProfessionService,
        };

        /// Expect AlreadyDeleted on a repeated delete
        #[tokio::test]
        async fn fails_on_repeat_delete() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Profession
            )?;
            let work_type = factory::insert_work_type(&test.state.db, "Plumber").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let profession =
                factory::insert_profession(&test.state.db, work_type.id, user.id).await?;

            let service = ProfessionService::new(&test.state.db);
            service.delete(profession.id).await.unwrap();

            let result = service.delete(profession.id).await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::AlreadyDeleted(
                    Resource::Profession,
                    _
                )))
            ));

            Ok(())
        }
    }
}
