use sea_orm::DatabaseConnection;

use crate::{
    model::job::ApplicantsDto,
    server::{
        data::{job::JobRepository, lifecycle::LifecycleRepository, user::UserRepository},
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        model::roster::OfferBoard,
        service::user::reduced_from,
    },
};

/// Runs the job offer workflow.
///
/// Applications live on the in-memory [`OfferBoard`]; acceptances are the
/// durable part and land in the `job_acceptor` table.
pub struct OfferService<'a> {
    db: &'a DatabaseConnection,
    board: &'a OfferBoard,
}

impl<'a> OfferService<'a> {
    /// Creates a new instance of [`OfferService`]
    pub fn new(db: &'a DatabaseConnection, board: &'a OfferBoard) -> Self {
        Self { db, board }
    }

    /// Records a worker's application for a job
    ///
    /// Applying again is a no-op, the worker stays listed once.
    pub async fn apply(&self, job_id: i32, user_id: i32) -> Result<(), Error> {
        self.require_active_job(job_id).await?;
        self.require_active_user(user_id).await?;

        self.board.apply(job_id, user_id).await;

        Ok(())
    }

    /// Lists the applicants for a job with their account details
    ///
    /// An empty roster is a valid answer, not an error. Applicants whose
    /// account was deleted after applying are left out.
    pub async fn applicants(&self, job_id: i32) -> Result<ApplicantsDto, Error> {
        self.require_active_job(job_id).await?;

        let users = LifecycleRepository::<entity::user::Entity>::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let mut applicants = Vec::new();
        for user_id in self.board.applicants(job_id).await {
            if let Some(user) = users.get_active(user_id).await? {
                let roles = user_repo.get_role_names(user.id).await?;
                applicants.push(reduced_from(user, roles));
            }
        }

        Ok(ApplicantsDto { job_id, applicants })
    }

    /// Accepts a worker for a job
    ///
    /// # Behavior
    /// - The job and the worker must both be active.
    /// - A worker can be accepted at most once per job, and accepts stop once
    ///   the posting's headcount is reached.
    /// - The acceptance is persisted and the remaining-worker counter drops
    ///   by one.
    ///
    /// # Returns
    /// - `Ok(i32)`: The number of worker slots still open
    /// - `Err(Error::ResourceError(ResourceError::NotFound))`: Missing or
    ///   deleted job or worker
    /// - `Err(Error::ResourceError(ResourceError::Conflict))`: The worker was
    ///   already accepted, or no slots remain
    pub async fn accept(&self, job_id: i32, user_id: i32, actor_id: i32) -> Result<i32, Error> {
        let job = LifecycleRepository::<entity::job::Entity>::new(self.db)
            .get_active(job_id)
            .await?
            .ok_or(ResourceError::NotFound(Resource::Job))?;

        self.require_active_user(user_id).await?;

        let repo = JobRepository::new(self.db);

        if repo.is_acceptor(job_id, user_id).await? {
            return Err(ResourceError::Conflict(
                Resource::Applicant,
                format!("User {user_id} has already been accepted"),
            )
            .into());
        }

        if job.workers_remaining <= 0 {
            return Err(ResourceError::Conflict(
                Resource::Job,
                format!("Job {job_id} has no remaining worker slots"),
            )
            .into());
        }

        let remaining = repo.record_acceptance(job, user_id, actor_id).await?;

        Ok(remaining)
    }

    /// Turns down a worker's application
    ///
    /// Rejecting a worker who never applied is reported as NotFound.
    pub async fn reject(&self, job_id: i32, user_id: i32) -> Result<(), Error> {
        self.require_active_job(job_id).await?;

        if !self.board.remove(job_id, user_id).await {
            return Err(ResourceError::NotFound(Resource::Applicant).into());
        }

        Ok(())
    }

    async fn require_active_job(&self, job_id: i32) -> Result<(), Error> {
        if LifecycleRepository::<entity::job::Entity>::new(self.db)
            .get_active(job_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::Job).into());
        }

        Ok(())
    }

    async fn require_active_user(&self, user_id: i32) -> Result<(), Error> {
        if LifecycleRepository::<entity::user::Entity>::new(self.db)
            .get_active(user_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::User).into());
        }

        Ok(())
    }
}
