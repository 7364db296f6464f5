use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::job::{CreateJobDto, JobDto, JobRecordDto},
    server::{
        data::{
            job::JobRepository, lifecycle::LifecycleRepository, work_type::WorkTypeRepository,
        },
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        service::soft_delete_result,
        validate::validate_job,
    },
};

pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    /// Creates a new instance of [`JobService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a new job
    ///
    /// # Behavior
    /// - The payload is validated, the work type name must exist in the
    ///   vocabulary, and the work site address and requestor must be active.
    /// - A requestor can hold at most one open job per work date, so a second
    ///   posting on the same date is rejected.
    ///
    /// # Returns
    /// - `Ok(JobRecordDto)`: The stored posting with its work type name
    /// - `Err(Error::ValidationError)`: A payload field was rejected
    /// - `Err(Error::ResourceError(ResourceError::NotFound))`: Unknown work
    ///   type, or a missing/deleted address or requestor
    /// - `Err(Error::ResourceError(ResourceError::Conflict))`: The requestor
    ///   already has an open job on the date
    pub async fn create(
        &self,
        payload: &CreateJobDto,
        actor_id: i32,
    ) -> Result<JobRecordDto, Error> {
        validate_job(payload)?;

        let work_type = WorkTypeRepository::new(self.db)
            .find_by_name(&payload.work_type)
            .await?
            .ok_or(ResourceError::NotFound(Resource::WorkType))?;

        self.check_references(payload).await?;

        let repo = JobRepository::new(self.db);

        if repo
            .find_open_conflict(payload.requestor_id, payload.work_date)
            .await?
            .is_some()
        {
            return Err(ResourceError::Conflict(
                Resource::Job,
                format!("An open job on {} already exists", payload.work_date),
            )
            .into());
        }

        let job = repo.create(payload, work_type.id, actor_id).await?;

        Ok(record_from(job, work_type.name))
    }

    /// Gets an active job by ID as the reduced projection
    pub async fn retrieve(&self, job_id: i32) -> Result<JobDto, Error> {
        let job = LifecycleRepository::<entity::job::Entity>::new(self.db)
            .get_active(job_id)
            .await?
            .ok_or(ResourceError::NotFound(Resource::Job))?;

        let work_type = WorkTypeRepository::new(self.db)
            .find_by_id(job.work_type_id)
            .await?
            .map(|work_type| work_type.name)
            .ok_or_else(|| {
                Error::InternalError(format!("Work type {} is missing", job.work_type_id))
            })?;

        Ok(reduced(job, work_type))
    }

    /// Lists every active job as the reduced projection
    pub async fn list(&self) -> Result<Vec<JobDto>, Error> {
        let jobs = LifecycleRepository::<entity::job::Entity>::new(self.db)
            .list_active()
            .await?;

        if jobs.is_empty() {
            return Err(ResourceError::NoMatches(Resource::Job).into());
        }

        reduced_many(self.db, jobs).await
    }

    /// Updates an active job posting
    ///
    /// References are re-resolved and the one-open-job-per-date rule is
    /// re-checked, ignoring the posting being updated so a no-op date keeps
    /// working.
    pub async fn update(
        &self,
        job_id: i32,
        payload: &CreateJobDto,
        actor_id: i32,
    ) -> Result<JobRecordDto, Error> {
        validate_job(payload)?;

        if LifecycleRepository::<entity::job::Entity>::new(self.db)
            .get_active(job_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::Job).into());
        }

        let work_type = WorkTypeRepository::new(self.db)
            .find_by_name(&payload.work_type)
            .await?
            .ok_or(ResourceError::NotFound(Resource::WorkType))?;

        self.check_references(payload).await?;

        let repo = JobRepository::new(self.db);

        if let Some(other) = repo
            .find_open_conflict(payload.requestor_id, payload.work_date)
            .await?
        {
            if other.id != job_id {
                return Err(ResourceError::Conflict(
                    Resource::Job,
                    format!("An open job on {} already exists", payload.work_date),
                )
                .into());
            }
        }

        let job = repo
            .update(job_id, payload, work_type.id, actor_id)
            .await?
            .ok_or(ResourceError::NotFound(Resource::Job))?;

        Ok(record_from(job, work_type.name))
    }

    /// Soft deletes an active job
    pub async fn delete(&self, job_id: i32) -> Result<(), Error> {
        let outcome = LifecycleRepository::<entity::job::Entity>::new(self.db)
            .soft_delete(job_id)
            .await?;

        soft_delete_result(outcome, Resource::Job, job_id)
    }

    /// Requires the work site address and the requestor to be active rows
    async fn check_references(&self, payload: &CreateJobDto) -> Result<(), Error> {
        if LifecycleRepository::<entity::address::Entity>::new(self.db)
            .get_active(payload.address_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::Address).into());
        }

        if LifecycleRepository::<entity::user::Entity>::new(self.db)
            .get_active(payload.requestor_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::User).into());
        }

        Ok(())
    }
}

/// Builds reduced projections for a batch, resolving work type names once.
pub(crate) async fn reduced_many(
    db: &DatabaseConnection,
    jobs: Vec<entity::job::Model>,
) -> Result<Vec<JobDto>, Error> {
    let ids = jobs.iter().map(|job| job.work_type_id).collect();

    let names: HashMap<i32, String> = WorkTypeRepository::new(db)
        .find_many_by_ids(ids)
        .await?
        .into_iter()
        .map(|work_type| (work_type.id, work_type.name))
        .collect();

    jobs.into_iter()
        .map(|job| {
            let work_type = names.get(&job.work_type_id).cloned().ok_or_else(|| {
                Error::InternalError(format!("Work type {} is missing", job.work_type_id))
            })?;

            Ok(reduced(job, work_type))
        })
        .collect()
}

fn reduced(job: entity::job::Model, work_type: String) -> JobDto {
    JobDto {
        work_type,
        number_of_workers: job.number_of_workers,
        work_date: job.work_date,
        working_days: job.working_days,
        work_pay: job.work_pay,
    }
}

fn record_from(job: entity::job::Model, work_type: String) -> JobRecordDto {
    JobRecordDto {
        id: job.id,
        work_type,
        number_of_workers: job.number_of_workers,
        workers_remaining: job.workers_remaining,
        work_date: job.work_date,
        working_days: job.working_days,
        work_pay: job.work_pay,
        address_id: job.address_id,
        requestor_id: job.requestor_id,
        job_status: job.job_status,
        created_at: job.created_at,
        updated_at: job.updated_at,
        created_by: job.created_by,
        updated_by: job.updated_by,
        is_deleted: job.is_deleted,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::model::job::CreateJobDto;

    fn job_payload(address_id: i32, requestor_id: i32) -> CreateJobDto {
        CreateJobDto {
            work_type: "Mason".to_string(),
            number_of_workers: 3,
            work_date: work_date(),
            working_days: 5,
            work_pay: 1500.0,
            address_id,
            requestor_id,
            job_status: None,
        }
    }

    fn work_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()
    }

    mod create {
        use entity::address::OwnerKind;
        use setu_test_utils::prelude::*;

        use crate::server::{
            data::lifecycle::LifecycleRepository,
            error::{
                resource::{Resource, ResourceError},
                validation::ValidationError,
                Error,
            },
            service::job::{
                tests::{job_payload, work_date},
                JobService,
            },
        };

        /// Expect the posting to open with its full headcount remaining
        #[tokio::test]
        async fn creates_open_job() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Address,
                entity::prelude::Job
            )?;
            factory::insert_work_type(&test.state.db, "Mason").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let address =
                factory::insert_address(&test.state.db, OwnerKind::HomeOwner, user.id, "Hyderabad")
                    .await?;

            let service = JobService::new(&test.state.db);
            let result = service.create(&job_payload(address.id, user.id), user.id).await;

            assert!(result.is_ok());
            let record = result.unwrap();

            assert_eq!(record.work_type, "Mason");
            assert_eq!(record.workers_remaining, 3);
            assert_eq!(record.job_status, "open");
            assert_eq!(record.created_by, Some(user.id));

            Ok(())
        }

        /// Expect NotFound when the work type name is unknown
        #[tokio::test]
        async fn fails_for_unknown_work_type() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Address,
                entity::prelude::Job
            )?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let address =
                factory::insert_address(&test.state.db, OwnerKind::HomeOwner, user.id, "Hyderabad")
                    .await?;

            let service = JobService::new(&test.state.db);
            let result = service.create(&job_payload(address.id, user.id), user.id).await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::NotFound(
                    Resource::WorkType
                )))
            ));

            Ok(())
        }

        /// Expect NotFound when the work site address was deleted
        #[tokio::test]
        async fn fails_for_deleted_address() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Address,
                entity::prelude::Job
            )?;
            factory::insert_work_type(&test.state.db, "Mason").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let address =
                factory::insert_address(&test.state.db, OwnerKind::HomeOwner, user.id, "Hyderabad")
                    .await?;

            LifecycleRepository::<entity::address::Entity>::new(&test.state.db)
                .soft_delete(address.id)
                .await?;

            let service = JobService::new(&test.state.db);
            let result = service.create(&job_payload(address.id, user.id), user.id).await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::NotFound(
                    Resource::Address
                )))
            ));

            Ok(())
        }

        /// Expect a second open job on the same date to be rejected
        #[tokio::test]
        async fn fails_for_duplicate_open_date() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Address,
                entity::prelude::Job
            )?;
            let work_type = factory::insert_work_type(&test.state.db, "Mason").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let address =
                factory::insert_address(&test.state.db, OwnerKind::HomeOwner, user.id, "Hyderabad")
                    .await?;
            factory::insert_job(&test.state.db, work_type.id, address.id, user.id, work_date())
                .await?;

            let service = JobService::new(&test.state.db);
            let result = service.create(&job_payload(address.id, user.id), user.id).await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::Conflict(
                    Resource::Job,
                    _
                )))
            ));

            Ok(())
        }

        /// Expect rejection when the work date is not in the future
        #[tokio::test]
        async fn rejects_past_work_date() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Address,
                entity::prelude::Job
            )?;
            factory::insert_work_type(&test.state.db, "Mason").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let address =
                factory::insert_address(&test.state.db, OwnerKind::HomeOwner, user.id, "Hyderabad")
                    .await?;

            let mut payload = job_payload(address.id, user.id);
            payload.work_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

            let service = JobService::new(&test.state.db);
            let result = service.create(&payload, user.id).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError { .. }))
            ));

            Ok(())
        }
    }

    mod retrieve {
        use entity::address::OwnerKind;
        use setu_test_utils::prelude::*;

        use crate::server::{
            data::lifecycle::LifecycleRepository,
            error::{
                resource::{Resource, ResourceError},
                Error,
            },
            service::job::{tests::work_date, JobService},
        };

        /// Expect the work type name in place of its ID
        #[tokio::test]
        async fn resolves_work_type_name() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Address,
                entity::prelude::Job
            )?;
            let work_type = factory::insert_work_type(&test.state.db, "Mason").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let address =
                factory::insert_address(&test.state.db, OwnerKind::HomeOwner, user.id, "Hyderabad")
                    .await?;
            let job =
                factory::insert_job(&test.state.db, work_type.id, address.id, user.id, work_date())
                    .await?;

            let service = JobService::new(&test.state.db);
            let result = service.retrieve(job.id).await;

            assert!(result.is_ok());
            let record = result.unwrap();

            assert_eq!(record.work_type, "Mason");
            assert_eq!(record.work_date, work_date());

            Ok(())
        }

        /// Expect NotFound for a soft deleted job
        #[tokio::test]
        async fn fails_for_deleted_job() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Address,
                entity::prelude::Job
            )?;
            let work_type = factory::insert_work_type(&test.state.db, "Mason").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let address =
                factory::insert_address(&test.state.db, OwnerKind::HomeOwner, user.id, "Hyderabad")
                    .await?;
            let job =
                factory::insert_job(&test.state.db, work_type.id, address.id, user.id, work_date())
                    .await?;

            LifecycleRepository::<entity::job::Entity>::new(&test.state.db)
                .soft_delete(job.id)
                .await?;

            let service = JobService::new(&test.state.db);
            let result = service.retrieve(job.id).await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::NotFound(Resource::Job)))
            ));

            Ok(())
        }
    }

    mod list {
        use chrono::NaiveDate;
        use entity::address::OwnerKind;
        use setu_test_utils::prelude::*;

        use crate::server::{
            data::lifecycle::LifecycleRepository,
            error::{
                resource::{Resource, ResourceError},
                Error,
            },
            service::job::{tests::work_date, JobService},
        };

        /// Expect only active postings in the listing
        #[tokio::test]
        async fn skips_deleted_jobs() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Address,
                entity::prelude::Job
            )?;
            let work_type = factory::insert_work_type(&test.state.db, "Mason").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let address =
                factory::insert_address(&test.state.db, OwnerKind::HomeOwner, user.id, "Hyderabad")
                    .await?;
            let kept =
                factory::insert_job(&test.state.db, work_type.id, address.id, user.id, work_date())
                    .await?;
            let dropped = factory::insert_job(
                &test.state.db,
                work_type.id,
                address.id,
                user.id,
                NaiveDate::from_ymd_opt(2030, 6, 16).unwrap(),
            )
            .await?;

            LifecycleRepository::<entity::job::Entity>::new(&test.state.db)
                .soft_delete(dropped.id)
                .await?;

            let service = JobService::new(&test.state.db);
            let records = service.list().await.unwrap();

            assert_eq!(records.len(), 1);
            assert_eq!(records[0].work_date, kept.work_date);

            Ok(())
        }

        /// Expect NoMatches when no jobs exist
        #[tokio::test]
        async fn fails_when_no_jobs() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Address,
                entity::prelude::Job
            )?;

            let service = JobService::new(&test.state.db);
            let result = service.list().await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::NoMatches(
                    Resource::Job
                )))
            ));

            Ok(())
        }
    }

    mod update {
        use chrono::NaiveDate;
        use entity::address::OwnerKind;
        use setu_test_utils::prelude::*;

        use crate::server::{
            error::{
                resource::{Resource, ResourceError},
                Error,
            },
            service::job::{
                tests::{job_payload, work_date},
                JobService,
            },
        };

        /// Expect keeping the posting's own date to pass the conflict check
        #[tokio::test]
        async fn allows_same_date_for_own_job() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Address,
                entity::prelude::Job,
                entity::prelude::JobAcceptor
            )?;
            let work_type = factory::insert_work_type(&test.state.db, "Mason").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let address =
                factory::insert_address(&test.state.db, OwnerKind::HomeOwner, user.id, "Hyderabad")
                    .await?;
            let job =
                factory::insert_job(&test.state.db, work_type.id, address.id, user.id, work_date())
                    .await?;

            let mut payload = job_payload(address.id, user.id);
            payload.work_pay = 1800.0;

            let service = JobService::new(&test.state.db);
            let result = service.update(job.id, &payload, user.id).await;

            assert!(result.is_ok());
            let record = result.unwrap();

            assert_eq!(record.work_pay, 1800.0);
            assert_eq!(record.updated_by, Some(user.id));

            Ok(())
        }

        /// Expect moving onto another posting's open date to be rejected
        #[tokio::test]
        async fn fails_for_other_open_job_on_date() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Address,
                entity::prelude::Job,
                entity::prelude::JobAcceptor
            )?;
            let work_type = factory::insert_work_type(&test.state.db, "Mason").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let address =
                factory::insert_address(&test.state.db, OwnerKind::HomeOwner, user.id, "Hyderabad")
                    .await?;
            factory::insert_job(&test.state.db, work_type.id, address.id, user.id, work_date())
                .await?;
            let moved = factory::insert_job(
                &test.state.db,
                work_type.id,
                address.id,
                user.id,
                NaiveDate::from_ymd_opt(2030, 6, 16).unwrap(),
            )
            .await?;

            let service = JobService::new(&test.state.db);
            let result = service
                .update(moved.id, &job_payload(address.id, user.id), user.id)
                .await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::Conflict(
                    Resource::Job,
                    _
                )))
            ));

            Ok(())
        }
    }

    mod delete {
        use entity::address::OwnerKind;
        use setu_test_utils::prelude::*;

        use crate::server::{
            error::{
                resource::{Resource, ResourceError},
                Error,
            },
            service::job::{tests::work_date, JobService},
        };

        /// Expect AlreadyDeleted on a repeated delete
        #[tokio::test]
        async fn fails_on_repeat_delete() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::WorkType,
                entity::prelude::User,
                entity::prelude::Address,
                entity::prelude::Job
            )?;
            let work_type = factory::insert_work_type(&test.state.db, "Mason").await?;
            let user =
                factory::insert_user(&test.state.db, "tester_user_01", "a@example.com", 9_000_000_001)
                    .await?;
            let address =
                factory::insert_address(&test.state.db, OwnerKind::HomeOwner, user.id, "Hyderabad")
                    .await?;
            let job =
                factory::insert_job(&test.state.db, work_type.id, address.id, user.id, work_date())
                    .await?;

            let service = JobService::new(&test.state.db);
            service.delete(job.id).await.unwrap();

            let result = service.delete(job.id).await;

            assert!(matches!(
                result,
                Err(Error::ResourceError(ResourceError::AlreadyDeleted(
                    Resource::Job,
                    _
                )))
            ));

            Ok(())
        }
    }
}
