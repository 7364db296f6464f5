use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        address::{AddressDto, AddressRecordDto, CreateAddressDto},
        api::{ErrorDto, MessageDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthedUser},
        service::address::AddressService,
    },
};

pub static ADDRESS_TAG: &str = "address";

/// Create an address for a house owner, work place, or shop site
#[utoipa::path(
    post,
    path = "/api/address",
    tag = ADDRESS_TAG,
    request_body = CreateAddressDto,
    responses(
        (status = 201, description = "Success when the address was created", body = AddressRecordDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Referenced owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_address(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Json(payload): Json<CreateAddressDto>,
) -> Result<impl IntoResponse, Error> {
    let address_service = AddressService::new(&state.db);

    let record = address_service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Get all active addresses
#[utoipa::path(
    get,
    path = "/api/address",
    tag = ADDRESS_TAG,
    responses(
        (status = 200, description = "Success when retrieving addresses", body = Vec<AddressDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "No addresses exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_addresses(
    State(state): State<AppState>,
    _authed: AuthedUser,
) -> Result<impl IntoResponse, Error> {
    let address_service = AddressService::new(&state.db);

    let records = address_service.list().await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Get an active address by ID
#[utoipa::path(
    get,
    path = "/api/address/{id}",
    tag = ADDRESS_TAG,
    params(("id" = i32, Path, description = "Address ID")),
    responses(
        (status = 200, description = "Success when retrieving the address", body = AddressDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Address not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_address(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Path(address_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let address_service = AddressService::new(&state.db);

    let record = address_service.retrieve(address_id).await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Update an active address
#[utoipa::path(
    put,
    path = "/api/address/{id}",
    tag = ADDRESS_TAG,
    params(("id" = i32, Path, description = "Address ID")),
    request_body = CreateAddressDto,
    responses(
        (status = 200, description = "Success when the address was updated", body = AddressRecordDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Address or referenced owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_address(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Path(address_id): Path<i32>,
    Json(payload): Json<CreateAddressDto>,
) -> Result<impl IntoResponse, Error> {
    let address_service = AddressService::new(&state.db);

    let record = address_service.update(address_id, &payload).await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Soft delete an active address
#[utoipa::path(
    delete,
    path = "/api/address/{id}",
    tag = ADDRESS_TAG,
    params(("id" = i32, Path, description = "Address ID")),
    responses(
        (status = 200, description = "Success when the address was deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Address not found or already deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_address(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Path(address_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let address_service = AddressService::new(&state.db);

    address_service.delete(address_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            detail: format!("Deleted address with ID {address_id}"),
        }),
    ))
}
