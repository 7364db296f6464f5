use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        job::{ApplicantsDto, CreateJobDto, JobDto, JobRecordDto, OfferDto},
        search::JobSearchDto,
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            auth::{AuthedUser, RoleName},
        },
        service::{job::JobService, offer::OfferService, search::job::JobSearchService},
    },
};

pub static JOB_TAG: &str = "job";

/// Post a new job
#[utoipa::path(
    post,
    path = "/api/job",
    tag = JOB_TAG,
    request_body = CreateJobDto,
    responses(
        (status = 201, description = "Success when the job was posted", body = JobRecordDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a house owner", body = ErrorDto),
        (status = 404, description = "Unknown work type, address, or requestor", body = ErrorDto),
        (status = 409, description = "An open job already exists on the date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_job(
    State(state): State<AppState>,
    authed: AuthedUser,
    Json(payload): Json<CreateJobDto>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::HouseOwner)?;

    let job_service = JobService::new(&state.db);

    let record = job_service.create(&payload, authed.id()).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Get all active job postings
#[utoipa::path(
    get,
    path = "/api/job",
    tag = JOB_TAG,
    responses(
        (status = 200, description = "Success when retrieving jobs", body = Vec<JobDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "No jobs exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_jobs(
    State(state): State<AppState>,
    _authed: AuthedUser,
) -> Result<impl IntoResponse, Error> {
    let job_service = JobService::new(&state.db);

    let records = job_service.list().await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Search active job postings by work type, date, duration, or pay
#[utoipa::path(
    get,
    path = "/api/job/search",
    tag = JOB_TAG,
    params(JobSearchDto),
    responses(
        (status = 200, description = "Success when jobs matched", body = Vec<JobDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Nothing matched the query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_jobs(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Query(params): Query<JobSearchDto>,
) -> Result<impl IntoResponse, Error> {
    let search_service = JobSearchService::new(&state.db);

    let records = search_service.search(&params).await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Get an active job posting by ID
#[utoipa::path(
    get,
    path = "/api/job/{id}",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Success when retrieving the job", body = JobDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_job(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let job_service = JobService::new(&state.db);

    let record = job_service.retrieve(job_id).await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Update an active job posting
#[utoipa::path(
    put,
    path = "/api/job/{id}",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job ID")),
    request_body = CreateJobDto,
    responses(
        (status = 200, description = "Success when the job was updated", body = JobRecordDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a house owner", body = ErrorDto),
        (status = 404, description = "Job, work type, address, or requestor not found", body = ErrorDto),
        (status = 409, description = "Another open job exists on the date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_job(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(job_id): Path<i32>,
    Json(payload): Json<CreateJobDto>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::HouseOwner)?;

    let job_service = JobService::new(&state.db);

    let record = job_service.update(job_id, &payload, authed.id()).await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Soft delete an active job posting
#[utoipa::path(
    delete,
    path = "/api/job/{id}",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Success when the job was deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a house owner", body = ErrorDto),
        (status = 404, description = "Job not found or already deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_job(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::HouseOwner)?;

    let job_service = JobService::new(&state.db);

    job_service.delete(job_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            detail: format!("Deleted job with ID {job_id}"),
        }),
    ))
}

/// Apply for an open job
#[utoipa::path(
    post,
    path = "/api/job/{id}/apply",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job ID")),
    request_body = OfferDto,
    responses(
        (status = 200, description = "Success when the application was recorded", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a worker", body = ErrorDto),
        (status = 404, description = "Job or applicant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_for_job(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(job_id): Path<i32>,
    Json(payload): Json<OfferDto>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::Worker)?;

    let offer_service = OfferService::new(&state.db, &state.offers);

    offer_service.apply(job_id, payload.user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            detail: format!("Applied for job {job_id}"),
        }),
    ))
}

/// Get the applicants for an active job
#[utoipa::path(
    get,
    path = "/api/job/{id}/applicants",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Success when retrieving applicants", body = ApplicantsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_job_applicants(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let offer_service = OfferService::new(&state.db, &state.offers);

    let roster = offer_service.applicants(job_id).await?;

    Ok((StatusCode::OK, Json(roster)))
}

/// Accept a worker for an active job
#[utoipa::path(
    put,
    path = "/api/job/{id}/accept",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job ID")),
    request_body = OfferDto,
    responses(
        (status = 200, description = "Success when the worker was accepted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a house owner", body = ErrorDto),
        (status = 404, description = "Job or worker not found", body = ErrorDto),
        (status = 409, description = "Worker already accepted or no slots remain", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_job_offer(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(job_id): Path<i32>,
    Json(payload): Json<OfferDto>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::HouseOwner)?;

    let offer_service = OfferService::new(&state.db, &state.offers);

    let remaining = offer_service
        .accept(job_id, payload.user_id, authed.id())
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            detail: format!(
                "Accepted user {} for job {job_id}; {remaining} worker slots remaining",
                payload.user_id
            ),
        }),
    ))
}

/// Turn down a worker's application for an active job
#[utoipa::path(
    put,
    path = "/api/job/{id}/reject",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job ID")),
    request_body = OfferDto,
    responses(
        (status = 200, description = "Success when the application was rejected", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a house owner", body = ErrorDto),
        (status = 404, description = "Job not found or the worker never applied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_job_offer(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(job_id): Path<i32>,
    Json(payload): Json<OfferDto>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::HouseOwner)?;

    let offer_service = OfferService::new(&state.db, &state.offers);

    offer_service.reject(job_id, payload.user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            detail: format!("Rejected user {} for job {job_id}", payload.user_id),
        }),
    ))
}
