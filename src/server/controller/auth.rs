use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, OtpConfirmDto, OtpRequestDto, TokenDto},
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{auth::AuthService, verification::VerificationService},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Exchange a username and password for bearer tokens
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Success when the credentials verify", body = TokenDto),
        (status = 401, description = "Unknown username or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let tokens = auth_service.login(&payload).await?;

    Ok((StatusCode::OK, Json(tokens)))
}

/// Request a one-time code for verifying an email address
#[utoipa::path(
    post,
    path = "/api/auth/otp/request",
    tag = AUTH_TAG,
    request_body = OtpRequestDto,
    responses(
        (status = 200, description = "Success when a code was issued", body = MessageDto),
        (status = 400, description = "Malformed email address", body = ErrorDto),
        (status = 409, description = "Email is already verified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_otp(
    State(state): State<AppState>,
    Json(payload): Json<OtpRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let verification_service =
        VerificationService::new(&state.db, &state.pending_otps, state.notifier.as_ref());

    verification_service.request_otp(&payload).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            detail: format!("Verification code sent to {}", payload.email),
        }),
    ))
}

/// Confirm a one-time code, unlocking account creation for the email
#[utoipa::path(
    post,
    path = "/api/auth/otp/confirm",
    tag = AUTH_TAG,
    request_body = OtpConfirmDto,
    responses(
        (status = 200, description = "Success when the code matches", body = MessageDto),
        (status = 400, description = "Wrong or expired code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_otp(
    State(state): State<AppState>,
    Json(payload): Json<OtpConfirmDto>,
) -> Result<impl IntoResponse, Error> {
    let verification_service =
        VerificationService::new(&state.db, &state.pending_otps, state.notifier.as_ref());

    verification_service.confirm_otp(&payload).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            detail: format!("Email {} verified", payload.email),
        }),
    ))
}
