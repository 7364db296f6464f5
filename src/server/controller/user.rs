use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CreateUserDto, UpdateUserDto, UserDto, UserRecordDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthedUser},
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Register a new user account
///
/// Registration is open, but the account's email must have been verified
/// through the OTP flow first.
#[utoipa::path(
    post,
    path = "/api/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Success when the account was created", body = UserRecordDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 404, description = "Unknown role or unverified email", body = ErrorDto),
        (status = 409, description = "Username, email, or mobile already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let record = user_service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Get all active user accounts
#[utoipa::path(
    get,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "No users exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    _authed: AuthedUser,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let records = user_service.list().await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Get an active user account by ID
#[utoipa::path(
    get,
    path = "/api/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Success when retrieving the user", body = UserDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let record = user_service.retrieve(user_id).await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Update an active user account
#[utoipa::path(
    put,
    path = "/api/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Success when the account was updated", body = UserRecordDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Username, email, or mobile already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let record = user_service.update(user_id, &payload, authed.id()).await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Soft delete an active user account
#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Success when the account was deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "User not found or already deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    user_service.delete(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            detail: format!("Deleted user with ID {user_id}"),
        }),
    ))
}
