use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Bearer tokens issued on a successful login
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserDto,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OtpRequestDto {
    pub email: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OtpConfirmDto {
    pub email: String,
    pub otp: i32,
}
