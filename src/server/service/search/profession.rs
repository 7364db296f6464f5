use std::collections::HashMap;

use entity::address::OwnerKind;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection};

use crate::{
    model::{
        address::AddressDto,
        profession::{ProfessionDto, ProfessionWithAddressDto},
        search::ProfessionSearchDto,
    },
    server::{
        data::{
            address::AddressRepository, profession::ProfessionRepository,
            work_type::WorkTypeRepository,
        },
        error::{
            resource::{Resource, ResourceError},
            Error,
        },
        service::{profession::reduced_many, user_contact},
    },
};

/// The two result shapes the profession search can produce.
///
/// Searching by city and work type embeds each worker's matching work place
/// address; every other combination returns the plain projection.
pub enum ProfessionSearchResult {
    Plain(Vec<ProfessionDto>),
    WithAddresses(Vec<ProfessionWithAddressDto>),
}

pub struct ProfessionSearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfessionSearchService<'a> {
    /// Creates a new instance of [`ProfessionSearchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches workers by profession, pay expectation, or work place city
    ///
    /// # Behavior
    /// - The filter is decided by exactly which parameters are present; an
    ///   empty query lists every active entry.
    /// - Every filtered combination keeps available workers only.
    /// - `salary` keeps workers expecting at most that amount. City filters
    ///   join through work place addresses, and the city-and-type combination
    ///   embeds the matching address in each hit.
    ///
    /// # Returns
    /// - `Ok(ProfessionSearchResult)`: The matching workers
    /// - `Err(Error::ResourceError(ResourceError::NotFound))`: The profession
    ///   or type name is not in the work type vocabulary
    /// - `Err(Error::ResourceError(ResourceError::NoMatches))`: Nothing
    ///   matched, or the parameter combination is not supported
    pub async fn search(
        &self,
        params: &ProfessionSearchDto,
    ) -> Result<ProfessionSearchResult, Error> {
        let repo = ProfessionRepository::new(self.db);

        match (
            params.profession.as_deref(),
            params.salary,
            params.city.as_deref(),
            params.category.as_deref(),
        ) {
            (None, None, None, None) => {
                let professions = repo.find_active_filtered(Condition::all()).await?;

                self.plain(professions).await
            }
            (Some(profession), None, None, None) => {
                let condition = Condition::all()
                    .add(entity::profession::Column::WorkTypeId.eq(self.work_type_id(profession).await?))
                    .add(entity::profession::Column::IsAvailable.eq(true));
                let professions = repo.find_active_filtered(condition).await?;

                self.plain(professions).await
            }
            (None, Some(salary), None, None) => {
                let condition = Condition::all()
                    .add(entity::profession::Column::ExpectedSalary.lte(salary))
                    .add(entity::profession::Column::IsAvailable.eq(true));
                let professions = repo.find_active_filtered(condition).await?;

                self.plain(professions).await
            }
            (Some(profession), Some(salary), None, None) => {
                let condition = Condition::all()
                    .add(entity::profession::Column::WorkTypeId.eq(self.work_type_id(profession).await?))
                    .add(entity::profession::Column::ExpectedSalary.lte(salary))
                    .add(entity::profession::Column::IsAvailable.eq(true));
                let professions = repo.find_active_filtered(condition).await?;

                self.plain(professions).await
            }
            (None, None, Some(city), None) => {
                let ids = self.work_place_ids(city).await?;
                let professions = repo.find_available_by_ids(ids, None).await?;

                self.plain(professions).await
            }
            (None, None, Some(city), Some(category)) => self.with_addresses(city, category).await,
            _ => Err(ResourceError::NoMatches(Resource::Profession).into()),
        }
    }

    async fn plain(
        &self,
        professions: Vec<entity::profession::Model>,
    ) -> Result<ProfessionSearchResult, Error> {
        if professions.is_empty() {
            return Err(ResourceError::NoMatches(Resource::Profession).into());
        }

        Ok(ProfessionSearchResult::Plain(
            reduced_many(self.db, professions).await?,
        ))
    }

    /// Runs the city-and-type combination, embedding the work place address
    async fn with_addresses(
        &self,
        city: &str,
        category: &str,
    ) -> Result<ProfessionSearchResult, Error> {
        let work_type = WorkTypeRepository::new(self.db)
            .find_by_name(category)
            .await?
            .ok_or(ResourceError::NotFound(Resource::WorkType))?;

        let mut sites: HashMap<i32, entity::address::Model> = AddressRepository::new(self.db)
            .find_active_by_city(OwnerKind::WorkPlace, city)
            .await?
            .into_iter()
            .map(|address| (address.owner_id, address))
            .collect();

        let professions = ProfessionRepository::new(self.db)
            .find_available_by_ids(sites.keys().copied().collect(), Some(work_type.id))
            .await?;

        if professions.is_empty() {
            return Err(ResourceError::NoMatches(Resource::Profession).into());
        }

        let mut records = Vec::with_capacity(professions.len());
        for profession in professions {
            let address = sites.remove(&profession.id).ok_or_else(|| {
                Error::InternalError(format!(
                    "Work place address for profession {} is missing",
                    profession.id
                ))
            })?;
            let user = user_contact(self.db, profession.user_id).await?;

            records.push(ProfessionWithAddressDto {
                user,
                profession: work_type.name.clone(),
                work_experience: profession.work_experience,
                expected_salary: profession.expected_salary,
                gender: profession.gender,
                address: AddressDto::from(address),
            });
        }

        Ok(ProfessionSearchResult::WithAddresses(records))
    }

    /// Resolves profession ids owning an active work place address in the city
    async fn work_place_ids(&self, city: &str) -> Result<Vec<i32>, Error> {
        let ids = AddressRepository::new(self.db)
            .find_active_by_city(OwnerKind::WorkPlace, city)
            .await?
            .into_iter()
            .map(|address| address.owner_id)
            .collect();

        Ok(ids)
    }

    async fn work_type_id(&self, name: &str) -> Result<i32, Error> {
        let work_type = WorkTypeRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or(ResourceError::NotFound(Resource::WorkType))?;

        Ok(work_type.id)
    }
}
