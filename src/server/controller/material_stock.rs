use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        material::{CreateMaterialStockDto, MaterialStockDto, MaterialStockRecordDto},
        search::MaterialSearchDto,
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            auth::{AuthedUser, RoleName},
        },
        service::{material_stock::MaterialStockService, search::material::MaterialSearchService},
    },
};

pub static MATERIAL_STOCK_TAG: &str = "material-stock";

/// Add a material stock entry to a shop
#[utoipa::path(
    post,
    path = "/api/material-stock",
    tag = MATERIAL_STOCK_TAG,
    request_body = CreateMaterialStockDto,
    responses(
        (status = 201, description = "Success when the entry was created", body = MaterialStockRecordDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a shop owner", body = ErrorDto),
        (status = 404, description = "Unknown category or shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_material_stock(
    State(state): State<AppState>,
    authed: AuthedUser,
    Json(payload): Json<CreateMaterialStockDto>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::ShopOwner)?;

    let material_service = MaterialStockService::new(&state.db);

    let record = material_service.create(&payload, authed.id()).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Get all active material stock entries
#[utoipa::path(
    get,
    path = "/api/material-stock",
    tag = MATERIAL_STOCK_TAG,
    responses(
        (status = 200, description = "Success when retrieving entries", body = Vec<MaterialStockDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "No entries exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_material_stocks(
    State(state): State<AppState>,
    _authed: AuthedUser,
) -> Result<impl IntoResponse, Error> {
    let material_service = MaterialStockService::new(&state.db);

    let records = material_service.list().await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Search active material stock by category, brand, or name
#[utoipa::path(
    get,
    path = "/api/material-stock/search",
    tag = MATERIAL_STOCK_TAG,
    params(MaterialSearchDto),
    responses(
        (status = 200, description = "Success when entries matched", body = Vec<MaterialStockDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Nothing matched the query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_material_stocks(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Query(params): Query<MaterialSearchDto>,
) -> Result<impl IntoResponse, Error> {
    let search_service = MaterialSearchService::new(&state.db);

    let records = search_service.search(&params).await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Get an active material stock entry by ID
#[utoipa::path(
    get,
    path = "/api/material-stock/{id}",
    tag = MATERIAL_STOCK_TAG,
    params(("id" = i32, Path, description = "Material stock ID")),
    responses(
        (status = 200, description = "Success when retrieving the entry", body = MaterialStockDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_material_stock(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Path(material_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let material_service = MaterialStockService::new(&state.db);

    let record = material_service.retrieve(material_id).await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Update an active material stock entry
#[utoipa::path(
    put,
    path = "/api/material-stock/{id}",
    tag = MATERIAL_STOCK_TAG,
    params(("id" = i32, Path, description = "Material stock ID")),
    request_body = CreateMaterialStockDto,
    responses(
        (status = 200, description = "Success when the entry was updated", body = MaterialStockRecordDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a shop owner", body = ErrorDto),
        (status = 404, description = "Entry, category, or shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_material_stock(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(material_id): Path<i32>,
    Json(payload): Json<CreateMaterialStockDto>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::ShopOwner)?;

    let material_service = MaterialStockService::new(&state.db);

    let record = material_service
        .update(material_id, &payload, authed.id())
        .await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Soft delete an active material stock entry
#[utoipa::path(
    delete,
    path = "/api/material-stock/{id}",
    tag = MATERIAL_STOCK_TAG,
    params(("id" = i32, Path, description = "Material stock ID")),
    responses(
        (status = 200, description = "Success when the entry was deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a shop owner", body = ErrorDto),
        (status = 404, description = "Entry not found or already deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_material_stock(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(material_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::ShopOwner)?;

    let material_service = MaterialStockService::new(&state.db);

    material_service.delete(material_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            detail: format!("Deleted material stock with ID {material_id}"),
        }),
    ))
}
