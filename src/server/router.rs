//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Constructs an Axum router with every marketplace endpoint registered. Each endpoint is
/// annotated with OpenAPI specifications via utoipa, which are collected into a unified
/// OpenAPI document. The router includes Swagger UI at `/api/docs` for interactive API
/// exploration and testing.
///
/// # Registered Endpoints
/// - `POST /api/auth/login`, `POST /api/auth/otp/request`, `POST /api/auth/otp/confirm` - Login and email verification
/// - `POST|GET /api/user`, `GET|PUT|DELETE /api/user/{id}` - Account management
/// - `POST|GET /api/address`, `GET|PUT|DELETE /api/address/{id}` - Addresses for users, work places, and shop sites
/// - `POST|GET /api/shop`, `GET /api/shop/search`, `GET|PUT|DELETE /api/shop/{id}` - Shops and their categories
/// - `POST|GET /api/material-stock`, `GET /api/material-stock/search`, `GET|PUT|DELETE /api/material-stock/{id}` - Shop inventory
/// - `POST|GET /api/worker`, `GET /api/worker/search`, `GET|PUT|DELETE /api/worker/{id}` - Worker profession profiles
/// - `POST|GET /api/job`, `GET /api/job/search`, `GET|PUT|DELETE /api/job/{id}` - Job postings
/// - `POST /api/job/{id}/apply`, `GET /api/job/{id}/applicants`, `PUT /api/job/{id}/accept`, `PUT /api/job/{id}/reject` - Offer workflow
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json` and includes:
/// - Endpoint paths and HTTP methods
/// - Request/response schemas
/// - Authentication requirements
/// - Error responses
///
/// # Swagger UI
/// Interactive API documentation is served at `/api/docs`, allowing developers to:
/// - Browse available endpoints
/// - View request/response schemas
/// - Test endpoints directly from the browser
/// - Download the OpenAPI specification
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be merged into the
/// main application router.
///
/// # Example
/// ```ignore
/// let app_state = AppState::new(db, &config.jwt_secret);
/// let router = routes().with_state(app_state);
/// // Router is now ready to serve HTTP requests
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Setu", description = "Setu API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication and email verification API routes"),
        (name = controller::user::USER_TAG, description = "User account API routes"),
        (name = controller::address::ADDRESS_TAG, description = "Address API routes"),
        (name = controller::shop::SHOP_TAG, description = "Shop API routes"),
        (name = controller::material_stock::MATERIAL_STOCK_TAG, description = "Shop inventory API routes"),
        (name = controller::profession::WORKER_TAG, description = "Worker profession API routes"),
        (name = controller::job::JOB_TAG, description = "Job posting and offer API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::request_otp))
        .routes(routes!(controller::auth::confirm_otp))
        .routes(routes!(
            controller::user::create_user,
            controller::user::get_users
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::address::create_address,
            controller::address::get_addresses
        ))
        .routes(routes!(
            controller::address::get_address,
            controller::address::update_address,
            controller::address::delete_address
        ))
        .routes(routes!(
            controller::shop::create_shop,
            controller::shop::get_shops
        ))
        .routes(routes!(controller::shop::search_shops))
        .routes(routes!(
            controller::shop::get_shop,
            controller::shop::update_shop,
            controller::shop::delete_shop
        ))
        .routes(routes!(
            controller::material_stock::create_material_stock,
            controller::material_stock::get_material_stocks
        ))
        .routes(routes!(controller::material_stock::search_material_stocks))
        .routes(routes!(
            controller::material_stock::get_material_stock,
            controller::material_stock::update_material_stock,
            controller::material_stock::delete_material_stock
        ))
        .routes(routes!(
            controller::profession::create_profession,
            controller::profession::get_professions
        ))
        .routes(routes!(controller::profession::search_professions))
        .routes(routes!(
            controller::profession::get_profession,
            controller::profession::update_profession,
            controller::profession::delete_profession
        ))
        .routes(routes!(
            controller::job::create_job,
            controller::job::get_jobs
        ))
        .routes(routes!(controller::job::search_jobs))
        .routes(routes!(
            controller::job::get_job,
            controller::job::update_job,
            controller::job::delete_job
        ))
        .routes(routes!(controller::job::apply_for_job))
        .routes(routes!(controller::job::get_job_applicants))
        .routes(routes!(controller::job::accept_job_offer))
        .routes(routes!(controller::job::reject_job_offer))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
