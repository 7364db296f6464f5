use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        search::ShopSearchDto,
        shop::{CreateShopDto, ShopDto, ShopRecordDto},
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            auth::{AuthedUser, RoleName},
        },
        service::{search::shop::ShopSearchService, shop::ShopService},
    },
};

pub static SHOP_TAG: &str = "shop";

/// Register a new shop
#[utoipa::path(
    post,
    path = "/api/shop",
    tag = SHOP_TAG,
    request_body = CreateShopDto,
    responses(
        (status = 201, description = "Success when the shop was created", body = ShopRecordDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a shop owner", body = ErrorDto),
        (status = 404, description = "Unknown category or owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shop(
    State(state): State<AppState>,
    authed: AuthedUser,
    Json(payload): Json<CreateShopDto>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::ShopOwner)?;

    let shop_service = ShopService::new(&state.db);

    let record = shop_service.create(&payload, authed.id()).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Get all active shops
#[utoipa::path(
    get,
    path = "/api/shop",
    tag = SHOP_TAG,
    responses(
        (status = 200, description = "Success when retrieving shops", body = Vec<ShopDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "No shops exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shops(
    State(state): State<AppState>,
    _authed: AuthedUser,
) -> Result<impl IntoResponse, Error> {
    let shop_service = ShopService::new(&state.db);

    let records = shop_service.list().await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Search active shops by name, city, or category
#[utoipa::path(
    get,
    path = "/api/shop/search",
    tag = SHOP_TAG,
    params(ShopSearchDto),
    responses(
        (status = 200, description = "Success when shops matched", body = Vec<ShopDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Nothing matched the query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_shops(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Query(params): Query<ShopSearchDto>,
) -> Result<impl IntoResponse, Error> {
    let search_service = ShopSearchService::new(&state.db);

    let records = search_service.search(&params).await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Get an active shop by ID
#[utoipa::path(
    get,
    path = "/api/shop/{id}",
    tag = SHOP_TAG,
    params(("id" = i32, Path, description = "Shop ID")),
    responses(
        (status = 200, description = "Success when retrieving the shop", body = ShopDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shop(
    State(state): State<AppState>,
    _authed: AuthedUser,
    Path(shop_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let shop_service = ShopService::new(&state.db);

    let record = shop_service.retrieve(shop_id).await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Update an active shop
#[utoipa::path(
    put,
    path = "/api/shop/{id}",
    tag = SHOP_TAG,
    params(("id" = i32, Path, description = "Shop ID")),
    request_body = CreateShopDto,
    responses(
        (status = 200, description = "Success when the shop was updated", body = ShopRecordDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a shop owner", body = ErrorDto),
        (status = 404, description = "Shop, category, or owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_shop(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(shop_id): Path<i32>,
    Json(payload): Json<CreateShopDto>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::ShopOwner)?;

    let shop_service = ShopService::new(&state.db);

    let record = shop_service.update(shop_id, &payload, authed.id()).await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Soft delete an active shop
#[utoipa::path(
    delete,
    path = "/api/shop/{id}",
    tag = SHOP_TAG,
    params(("id" = i32, Path, description = "Shop ID")),
    responses(
        (status = 200, description = "Success when the shop was deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not a shop owner", body = ErrorDto),
        (status = 404, description = "Shop not found or already deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_shop(
    State(state): State<AppState>,
    authed: AuthedUser,
    Path(shop_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    authed.require_role(RoleName::ShopOwner)?;

    let shop_service = ShopService::new(&state.db);

    shop_service.delete(shop_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            detail: format!("Deleted shop with ID {shop_id}"),
        }),
    ))
}
