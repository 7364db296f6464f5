use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use entity::address::OwnerKind;

/// The row an address hangs off of: a house owner's account, a worker's
/// profession, or a shop site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum OwnerRefDto {
    HomeOwner(i32),
    WorkPlace(i32),
    ShopSite(i32),
}

impl OwnerRefDto {
    pub fn from_columns(kind: OwnerKind, owner_id: i32) -> Self {
        match kind {
            OwnerKind::HomeOwner => Self::HomeOwner(owner_id),
            OwnerKind::WorkPlace => Self::WorkPlace(owner_id),
            OwnerKind::ShopSite => Self::ShopSite(owner_id),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateAddressDto {
    pub building_number: Option<String>,
    pub street: Option<String>,
    pub village_area: Option<String>,
    pub city: String,
    pub landmark: String,
    pub district: String,
    pub state: String,
    pub pincode: i32,
    pub owner: OwnerRefDto,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddressDto {
    pub building_number: Option<String>,
    pub street: Option<String>,
    pub village_area: Option<String>,
    pub city: String,
    pub landmark: String,
    pub district: String,
    pub state: String,
    pub pincode: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddressRecordDto {
    pub id: i32,
    pub building_number: Option<String>,
    pub street: Option<String>,
    pub village_area: Option<String>,
    pub city: String,
    pub landmark: String,
    pub district: String,
    pub state: String,
    pub pincode: i32,
    pub owner: OwnerRefDto,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_deleted: bool,
}

impl From<entity::address::Model> for AddressDto {
    fn from(address: entity::address::Model) -> Self {
        Self {
            building_number: address.building_number,
            street: address.street,
            village_area: address.village_area,
            city: address.city,
            landmark: address.landmark,
            district: address.district,
            state: address.state,
            pincode: address.pincode,
        }
    }
}

impl From<entity::address::Model> for AddressRecordDto {
    fn from(address: entity::address::Model) -> Self {
        Self {
            id: address.id,
            building_number: address.building_number,
            street: address.street,
            village_area: address.village_area,
            city: address.city,
            landmark: address.landmark,
            district: address.district,
            state: address.state,
            pincode: address.pincode,
            owner: OwnerRefDto::from_columns(address.owner_kind, address.owner_id),
            created_at: address.created_at,
            updated_at: address.updated_at,
            created_by: address.created_by,
            updated_by: address.updated_by,
            is_deleted: address.is_deleted,
        }
    }
}
