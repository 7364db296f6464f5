use sea_orm::DatabaseConnection;

use crate::{
    model::address::{AddressDto, AddressRecordDto, CreateAddressDto},
    server::{
        data::{address::AddressRepository, lifecycle::LifecycleRepository},
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        service::{
            owner::{DbOwnerLookup, OwnerLookup},
            soft_delete_result,
        },
        validate::validate_address,
    },
};

pub struct AddressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressService<'a> {
    /// Creates a new instance of [`AddressService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an address for a resolved owner
    ///
    /// # Behavior
    /// - The payload is validated, then the owner reference is resolved to
    ///   its storage columns. A reference to a missing or deleted row fails
    ///   with `NotFound` naming the referenced resource.
    /// - Audit stamps point at the user who answers for the owner: the house
    ///   owner's own account, the profession's worker, or the shop's owner.
    ///
    /// # Returns
    /// - `Ok(AddressRecordDto)`: The stored address with its owner reference
    /// - `Err(Error::ValidationError)`: A payload field was rejected
    /// - `Err(Error::ResourceError(ResourceError::NotFound))`: The owner
    ///   reference does not resolve to an active row
    pub async fn create(&self, payload: &CreateAddressDto) -> Result<AddressRecordDto, Error> {
        validate_address(payload)?;

        let owner = DbOwnerLookup::new(self.db).resolve(payload.owner).await?;

        let address = AddressRepository::new(self.db)
            .create(payload, owner.kind, owner.owner_id, owner.user_id)
            .await?;

        Ok(address.into())
    }

    /// Gets an active address by ID as the reduced projection
    pub async fn retrieve(&self, address_id: i32) -> Result<AddressDto, Error> {
        let address = LifecycleRepository::<entity::address::Entity>::new(self.db)
            .get_active(address_id)
            .await?
            .ok_or(ResourceError::NotFound(Resource::Address))?;

        Ok(address.into())
    }

    /// Lists every active address as the reduced projection
    pub async fn list(&self) -> Result<Vec<AddressDto>, Error> {
        let addresses = LifecycleRepository::<entity::address::Entity>::new(self.db)
            .list_active()
            .await?;

        if addresses.is_empty() {
            return Err(ResourceError::NoMatches(Resource::Address).into());
        }

        Ok(addresses.into_iter().map(AddressDto::from).collect())
    }

    /// Updates an active address
    ///
    /// The owner reference is re-resolved exactly like on create, so an
    /// address can move between owners as long as the new owner is active.
    pub async fn update(
        &self,
        address_id: i32,
        payload: &CreateAddressDto,
    ) -> Result<AddressRecordDto, Error> {
        validate_address(payload)?;

        if LifecycleRepository::<entity::address::Entity>::new(self.db)
            .get_active(address_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::NotFound(Resource::Address).into());
        }

        let owner = DbOwnerLookup::new(self.db).resolve(payload.owner).await?;

        let address = AddressRepository::new(self.db)
            .update(address_id, payload, owner.kind, owner.owner_id, owner.user_id)
            .await?
            .ok_or(ResourceError::NotFound(Resource::Address))?;

        Ok(address.into())
    }

    /// Soft deletes an active address
    pub async fn delete(&self, address_id: i32) -> Result<(), Error> {
        let outcome = LifecycleRepository::<entity::address::Entity>::new(self.db)
            .soft_delete(address_id)
            .await?;

        soft_delete_result(outcome, Resource::Address, address_id)
    }
}
