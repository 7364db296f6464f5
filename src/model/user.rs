use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub name: String,
    pub mobile: i64,
    pub email: String,
    pub roles: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserDto {
    pub username: String,
    pub password: Option<String>,
    pub name: String,
    pub mobile: i64,
    pub email: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub username: String,
    pub name: String,
    pub email: String,
    pub mobile: i64,
    pub roles: Vec<String>,
}

/// Contact projection embedded in shop and worker responses
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserContactDto {
    pub name: String,
    pub email: String,
    pub mobile: i64,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserRecordDto {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub mobile: i64,
    pub email: String,
    pub roles: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_deleted: bool,
}

impl UserContactDto {
    pub fn from_model(user: &entity::user::Model) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            mobile: user.mobile,
        }
    }
}
