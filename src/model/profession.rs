use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{address::AddressDto, user::UserContactDto};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateProfessionDto {
    /// Work type name, e.g. "Plumber"
    pub profession: String,
    pub work_experience: f64,
    pub expected_salary: i32,
    pub gender: String,
    pub user_id: i32,
    /// Defaults to true when omitted
    pub is_available: Option<bool>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfessionDto {
    pub user: UserContactDto,
    pub profession: String,
    pub work_experience: f64,
    pub expected_salary: i32,
    pub gender: String,
}

/// A worker search hit that carries the matched work place address
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfessionWithAddressDto {
    pub user: UserContactDto,
    pub profession: String,
    pub work_experience: f64,
    pub expected_salary: i32,
    pub gender: String,
    pub address: AddressDto,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfessionRecordDto {
    pub id: i32,
    pub profession: String,
    pub work_experience: f64,
    pub expected_salary: i32,
    pub is_available: bool,
    pub gender: String,
    pub user_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_deleted: bool,
}
