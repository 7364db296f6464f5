use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::user::UserContactDto;

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateShopDto {
    pub name: String,
    pub invented_year: i32,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub mobile: Option<i64>,
    pub user_id: i32,
    /// Shop category name, e.g. "Electrical"
    #[serde(rename = "type")]
    pub category: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShopDto {
    pub name: String,
    pub owner: UserContactDto,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub mobile: Option<i64>,
    pub invented_year: i32,
    pub categories: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShopRecordDto {
    pub id: i32,
    pub name: String,
    pub invented_year: i32,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub mobile: Option<i64>,
    pub user_id: i32,
    pub categories: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_deleted: bool,
}
