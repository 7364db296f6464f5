use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use entity::address::OwnerKind;

use crate::model::address::CreateAddressDto;

pub struct AddressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressRepository<'a> {
    /// Creates a new instance of [`AddressRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new address
    ///
    /// The owner reference must already be resolved to its kind and row ID.
    pub async fn create(
        &self,
        payload: &CreateAddressDto,
        owner_kind: OwnerKind,
        owner_id: i32,
        actor_id: i32,
    ) -> Result<entity::address::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let address = entity::address::ActiveModel {
            building_number: ActiveValue::Set(payload.building_number.clone()),
            street: ActiveValue::Set(payload.street.clone()),
            village_area: ActiveValue::Set(payload.village_area.clone()),
            city: ActiveValue::Set(payload.city.clone()),
            landmark: ActiveValue::Set(payload.landmark.clone()),
            district: ActiveValue::Set(payload.district.clone()),
            state: ActiveValue::Set(payload.state.clone()),
            pincode: ActiveValue::Set(payload.pincode),
            owner_kind: ActiveValue::Set(owner_kind),
            owner_id: ActiveValue::Set(owner_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(Some(actor_id)),
            updated_by: ActiveValue::Set(Some(actor_id)),
            is_deleted: ActiveValue::Set(false),
            ..Default::default()
        };

        address.insert(self.db).await
    }

    /// Updates an address, returning Ok(None) when no row with the ID exists
    pub async fn update(
        &self,
        address_id: i32,
        payload: &CreateAddressDto,
        owner_kind: OwnerKind,
        owner_id: i32,
        actor_id: i32,
    ) -> Result<Option<entity::address::Model>, DbErr> {
        let address = match entity::prelude::Address::find_by_id(address_id)
            .one(self.db)
            .await?
        {
            Some(address) => address,
            None => return Ok(None),
        };

        let mut address_am = address.into_active_model();
        address_am.building_number = ActiveValue::Set(payload.building_number.clone());
        address_am.street = ActiveValue::Set(payload.street.clone());
        address_am.village_area = ActiveValue::Set(payload.village_area.clone());
        address_am.city = ActiveValue::Set(payload.city.clone());
        address_am.landmark = ActiveValue::Set(payload.landmark.clone());
        address_am.district = ActiveValue::Set(payload.district.clone());
        address_am.state = ActiveValue::Set(payload.state.clone());
        address_am.pincode = ActiveValue::Set(payload.pincode);
        address_am.owner_kind = ActiveValue::Set(owner_kind);
        address_am.owner_id = ActiveValue::Set(owner_id);
        address_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());
        address_am.updated_by = ActiveValue::Set(Some(actor_id));

        let address = address_am.update(self.db).await?;

        Ok(Some(address))
    }

    /// Gets active addresses of one owner kind in a city
    ///
    /// The owner kind narrows the join target: work place addresses point at
    /// professions, shop site addresses at shops.
    pub async fn find_active_by_city(
        &self,
        owner_kind: OwnerKind,
        city: &str,
    ) -> Result<Vec<entity::address::Model>, DbErr> {
        entity::prelude::Address::find()
            .filter(entity::address::Column::OwnerKind.eq(owner_kind))
            .filter(entity::address::Column::City.eq(city))
            .filter(entity::address::Column::IsDeleted.eq(false))
            .all(self.db)
            .await
    }
}
