use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        profession::{CreateProfessionDto, ProfessionDto, ProfessionRecordDto},
        search::ProfessionSearchDto,
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            auth::{AuthedUser, RoleName},
        },
        service::{
            profession::ProfessionService,
            search::profession::{ProfessionSearchResult, ProfessionSearchService},
        },
    },
};

pub static WORKER_TAG: &str = "worker";

/// Register a worker's profession
#[utoipa::path(
    post,
    path = "/api/worker",
    tag = WORKER_TAG,
    request_body = CreateProfessionDto,
    responses(
        (status = 201, description = "Success when the profession was registered", body = ProfessionRecordDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a worker", body = ErrorDto),
        (status = 404, description = "Unknown work type or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_profession(
    State(state): State<AppState>,
    authed: AuthedUser,
    Json(payload): Json<CreateProfessionDto>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::Worker)?;

    let profession_service = ProfessionService::new(&state.db);

    let record = profession_service.create(&payload, authed.id()).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Get all active professions
#[utoipa::path(
    get,
    path = "/api/worker",
    tag = WORKER_TAG,
    responses(
        (status = 200, description = "Success when retrieving professions", body = Vec<ProfessionDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "No professions exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_professions(
    State(state): State<AppState>,
    _authed: AuthedUser,
) -> Result<impl IntoResponse, Error> {
    let profession_service = ProfessionService::new(&state.db);

    let records = profession_service.list().await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Search available workers by profession, salary, or city
///
/// Searching by city and type together embeds each worker's matching work
/// place address in the results.
#[utoipa::path(
    get,
    path = "/api/worker/search",
    tag = WORKER_TAG,
    params(ProfessionSearchDto),
    responses(
        (status = 200, description = "Success when workers matched", body = Vec<ProfessionDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Nothing matched the query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_professions(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Query(params): Query<ProfessionSearchDto>,
) -> Result<impl IntoResponse, Error> {
    let search_service = ProfessionSearchService::new(&state.db);

    let response = match search_service.search(&params).await? {
        ProfessionSearchResult::Plain(records) => {
            (StatusCode::OK, Json(records)).into_response()
        }
        ProfessionSearchResult::WithAddresses(records) => {
            (StatusCode::OK, Json(records)).into_response()
        }
    };

    Ok(response)
}

/// Get an active profession by ID
#[utoipa::path(
    get,
    path = "/api/worker/{id}",
    tag = WORKER_TAG,
    params(("id" = i32, Path, description = "Profession ID")),
    responses(
        (status = 200, description = "Success when retrieving the profession", body = ProfessionDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Profession not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profession(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Path(profession_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let profession_service = ProfessionService::new(&state.db);

    let record = profession_service.retrieve(profession_id).await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Update an active profession
#[utoipa::path(
    put,
    path = "/api/worker/{id}",
    tag = WORKER_TAG,
    params(("id" = i32, Path, description = "Profession ID")),
    request_body = CreateProfessionDto,
    responses(
        (status = 200, description = "Success when the profession was updated", body = ProfessionRecordDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a worker", body = ErrorDto),
        (status = 404, description = "Profession, work type, or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profession(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(profession_id): Path<i32>,
    Json(payload): Json<CreateProfessionDto>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::Worker)?;

    let profession_service = ProfessionService::new(&state.db);

    let record = profession_service
        .update(profession_id, &payload, authed.id())
        .await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Soft delete an active profession
#[utoipa::path(
    delete,
    path = "/api/worker/{id}",
    tag = WORKER_TAG,
    params(("id" = i32, Path, description = "Profession ID")),
    responses(
        (status = 200, description = "Success when the profession was deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a worker", body = ErrorDto),
        (status = 404, description = "Profession not found or already deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_profession(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(profession_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::Worker)?;

    let profession_service = ProfessionService::new(&state.db);

    profession_service.delete(profession_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            detail: format!("Deleted profession with ID {profession_id}"),
        }),
    ))
}
