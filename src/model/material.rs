use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateMaterialStockDto {
    /// Shop category name, e.g. "Raw Material"
    #[serde(rename = "type")]
    pub category: String,
    pub name: String,
    /// Quantity with unit, e.g. "40 kg"
    pub stock: String,
    pub rate: f64,
    pub brand: String,
    pub shop_id: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MaterialStockDto {
    #[serde(rename = "type")]
    pub category: String,
    pub name: String,
    pub stock: String,
    pub rate: f64,
    pub brand: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MaterialStockRecordDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub category: String,
    pub name: String,
    pub stock: String,
    pub rate: f64,
    pub brand: String,
    pub shop_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_deleted: bool,
}
