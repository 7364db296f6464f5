use sea_orm::{ColumnTrait, Condition, DatabaseConnection};

use crate::{
    model::{job::JobDto, search::JobSearchDto},
    server::{
        data::{job::JobRepository, work_type::WorkTypeRepository},
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        service::job::reduced_many,
    },
};

pub struct JobSearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobSearchService<'a> {
    /// Creates a new instance of [`JobSearchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches active job postings
    ///
    /// # Behavior
    /// - The filter is decided by exactly which parameters are present; an
    ///   empty query lists every active posting.
    /// - `work_type` and `work_date` match exactly, `days` keeps postings
    ///   lasting at most that many days, `pay` keeps postings paying at
    ///   least that amount.
    ///
    /// # Returns
    /// - `Ok(Vec<JobDto>)`: The matching postings
    /// - `Err(Error::ResourceError(ResourceError::NotFound))`: The work type
    ///   name is not in the vocabulary
    /// - `Err(Error::ResourceError(ResourceError::NoMatches))`: Nothing
    ///   matched, or the parameter combination is not supported
    pub async fn search(&self, params: &JobSearchDto) -> Result<Vec<JobDto>, Error> {
        let condition = match (
            params.work_type.as_deref(),
            params.work_date,
            params.days,
            params.pay,
        ) {
            (None, None, None, None) => Condition::all(),
            (Some(work_type), None, None, None) => Condition::all()
                .add(entity::job::Column::WorkTypeId.eq(self.work_type_id(work_type).await?)),
            (None, None, Some(days), None) => {
                Condition::all().add(entity::job::Column::WorkingDays.lte(days))
            }
            (None, None, None, Some(pay)) => {
                Condition::all().add(entity::job::Column::WorkPay.gte(pay))
            }
            (None, Some(work_date), None, None) => {
                Condition::all().add(entity::job::Column::WorkDate.eq(work_date))
            }
            (None, Some(work_date), None, Some(pay)) => Condition::all()
                .add(entity::job::Column::WorkDate.eq(work_date))
                .add(entity::job::Column::WorkPay.gte(pay)),
            (Some(work_type), Some(work_date), None, None) => Condition::all()
                .add(entity::job::Column::WorkTypeId.eq(self.work_type_id(work_type).await?))
                .add(entity::job::Column::WorkDate.eq(work_date)),
            (None, Some(work_date), Some(days), None) => Condition::all()
                .add(entity::job::Column::WorkDate.eq(work_date))
                .add(entity::job::Column::WorkingDays.lte(days)),
            (None, Some(work_date), Some(days), Some(pay)) => Condition::all()
                .add(entity::job::Column::WorkDate.eq(work_date))
                .add(entity::job::Column::WorkingDays.lte(days))
                .add(entity::job::Column::WorkPay.gte(pay)),
            _ => return Err(ResourceError::NoMatches(Resource::Job).into()),
        };

        let jobs = JobRepository::new(self.db)
            .find_active_filtered(condition)
            .await?;

        if jobs.is_empty() {
            return Err(ResourceError::NoMatches(Resource::Job).into());
        }

        reduced_many(self.db, jobs).await
    }

    async fn work_type_id(&self, name: &str) -> Result<i32, Error> {
        let work_type = WorkTypeRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or(ResourceError::NotFound(Resource::WorkType))?;

        Ok(work_type.id)
    }
}
