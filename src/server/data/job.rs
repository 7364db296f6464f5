use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::job::CreateJobDto;

const DEFAULT_JOB_STATUS: &str = "open";

pub struct JobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobRepository<'a> {
    /// Creates a new instance of [`JobRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new job posting
    ///
    /// The remaining-worker counter starts at the requested headcount and the
    /// status defaults to open when the payload leaves it out.
    pub async fn create(
        &self,
        payload: &CreateJobDto,
        work_type_id: i32,
        actor_id: i32,
    ) -> Result<entity::job::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let job_status = payload
            .job_status
            .clone()
            .unwrap_or_else(|| DEFAULT_JOB_STATUS.to_string());

        let job = entity::job::ActiveModel {
            work_type_id: ActiveValue::Set(work_type_id),
            number_of_workers: ActiveValue::Set(payload.number_of_workers),
            workers_remaining: ActiveValue::Set(payload.number_of_workers),
            work_date: ActiveValue::Set(payload.work_date),
            working_days: ActiveValue::Set(payload.working_days),
            work_pay: ActiveValue::Set(payload.work_pay),
            address_id: ActiveValue::Set(payload.address_id),
            requestor_id: ActiveValue::Set(payload.requestor_id),
            job_status: ActiveValue::Set(job_status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(Some(actor_id)),
            updated_by: ActiveValue::Set(Some(actor_id)),
            is_deleted: ActiveValue::Set(false),
            ..Default::default()
        };

        job.insert(self.db).await
    }

    /// Updates a job posting, returning Ok(None) when no row exists
    ///
    /// The remaining-worker counter is recomputed from the recorded acceptors
    /// so a changed headcount keeps the counter consistent with them. An
    /// omitted status keeps its stored value.
    pub async fn update(
        &self,
        job_id: i32,
        payload: &CreateJobDto,
        work_type_id: i32,
        actor_id: i32,
    ) -> Result<Option<entity::job::Model>, DbErr> {
        let job = match entity::prelude::Job::find_by_id(job_id).one(self.db).await? {
            Some(job) => job,
            None => return Ok(None),
        };

        let accepted = entity::prelude::JobAcceptor::find()
            .filter(entity::job_acceptor::Column::JobId.eq(job_id))
            .count(self.db)
            .await? as i32;
        let current_status = job.job_status.clone();

        let mut job_am = job.into_active_model();
        job_am.work_type_id = ActiveValue::Set(work_type_id);
        job_am.number_of_workers = ActiveValue::Set(payload.number_of_workers);
        job_am.workers_remaining =
            ActiveValue::Set((payload.number_of_workers - accepted).max(0));
        job_am.work_date = ActiveValue::Set(payload.work_date);
        job_am.working_days = ActiveValue::Set(payload.working_days);
        job_am.work_pay = ActiveValue::Set(payload.work_pay);
        job_am.address_id = ActiveValue::Set(payload.address_id);
        job_am.requestor_id = ActiveValue::Set(payload.requestor_id);
        job_am.job_status = ActiveValue::Set(payload.job_status.clone().unwrap_or(current_status));
        job_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());
        job_am.updated_by = ActiveValue::Set(Some(actor_id));

        let job = job_am.update(self.db).await?;

        Ok(Some(job))
    }

    /// Gets active jobs matching the given filters
    pub async fn find_active_filtered(
        &self,
        condition: Condition,
    ) -> Result<Vec<entity::job::Model>, DbErr> {
        entity::prelude::Job::find()
            .filter(entity::job::Column::IsDeleted.eq(false))
            .filter(condition)
            .order_by_asc(entity::job::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the requestor's active open job on the given date, if any
    pub async fn find_open_conflict(
        &self,
        requestor_id: i32,
        work_date: NaiveDate,
    ) -> Result<Option<entity::job::Model>, DbErr> {
        entity::prelude::Job::find()
            .filter(entity::job::Column::RequestorId.eq(requestor_id))
            .filter(entity::job::Column::WorkDate.eq(work_date))
            .filter(entity::job::Column::JobStatus.eq(DEFAULT_JOB_STATUS))
            .filter(entity::job::Column::IsDeleted.eq(false))
            .one(self.db)
            .await
    }

    /// Checks whether the user has already been accepted for the job
    pub async fn is_acceptor(&self, job_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::JobAcceptor::find()
            .filter(entity::job_acceptor::Column::JobId.eq(job_id))
            .filter(entity::job_acceptor::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Records an acceptance and returns the new remaining-worker count
    ///
    /// Callers must have checked that the counter is still positive and that
    /// the user is not already an acceptor.
    pub async fn record_acceptance(
        &self,
        job: entity::job::Model,
        user_id: i32,
        actor_id: i32,
    ) -> Result<i32, DbErr> {
        let acceptor = entity::job_acceptor::ActiveModel {
            job_id: ActiveValue::Set(job.id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        acceptor.insert(self.db).await?;

        let remaining = job.workers_remaining - 1;

        let mut job_am = job.into_active_model();
        job_am.workers_remaining = ActiveValue::Set(remaining);
        job_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());
        job_am.updated_by = ActiveValue::Set(Some(actor_id));

        job_am.update(self.db).await?;

        Ok(remaining)
    }
}
