use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::profession::CreateProfessionDto;

pub struct ProfessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfessionRepository<'a> {
    /// Creates a new instance of [`ProfessionRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new profession entry
    ///
    /// Availability defaults to true when the payload leaves it out.
    pub async fn create(
        &self,
        payload: &CreateProfessionDto,
        work_type_id: i32,
        actor_id: i32,
    ) -> Result<entity::profession::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let profession = entity::profession::ActiveModel {
            work_type_id: ActiveValue::Set(work_type_id),
            work_experience: ActiveValue::Set(payload.work_experience),
            expected_salary: ActiveValue::Set(payload.expected_salary),
            is_available: ActiveValue::Set(payload.is_available.unwrap_or(true)),
            gender: ActiveValue::Set(payload.gender.clone()),
            user_id: ActiveValue::Set(payload.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(Some(actor_id)),
            updated_by: ActiveValue::Set(Some(actor_id)),
            is_deleted: ActiveValue::Set(false),
            ..Default::default()
        };

        profession.insert(self.db).await
    }

    /// Updates a profession entry, returning Ok(None) when no row exists
    pub async fn update(
        &self,
        profession_id: i32,
        payload: &CreateProfessionDto,
        work_type_id: i32,
        actor_id: i32,
    ) -> Result<Option<entity::profession::Model>, DbErr> {
        let profession = match entity::prelude::Profession::find_by_id(profession_id)
            .one(self.db)
            .await?
        {
            Some(profession) => profession,
            None => return Ok(None),
        };

        let current_availability = profession.is_available;

        let mut profession_am = profession.into_active_model();
        profession_am.work_type_id = ActiveValue::Set(work_type_id);
        profession_am.work_experience = ActiveValue::Set(payload.work_experience);
        profession_am.expected_salary = ActiveValue::Set(payload.expected_salary);
        profession_am.is_available =
            ActiveValue::Set(payload.is_available.unwrap_or(current_availability));
        profession_am.gender = ActiveValue::Set(payload.gender.clone());
        profession_am.user_id = ActiveValue::Set(payload.user_id);
        profession_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());
        profession_am.updated_by = ActiveValue::Set(Some(actor_id));

        let profession = profession_am.update(self.db).await?;

        Ok(Some(profession))
    }

    /// Gets active professions matching the given filters
    pub async fn find_active_filtered(
        &self,
        condition: Condition,
    ) -> Result<Vec<entity::profession::Model>, DbErr> {
        entity::prelude::Profession::find()
            .filter(entity::profession::Column::IsDeleted.eq(false))
            .filter(condition)
            .order_by_asc(entity::profession::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets active, available professions from an ID set
    ///
    /// Used by city searches after work place addresses have been resolved to
    /// their owning profession IDs. An optional work type narrows the set.
    pub async fn find_available_by_ids(
        &self,
        ids: Vec<i32>,
        work_type_id: Option<i32>,
    ) -> Result<Vec<entity::profession::Model>, DbErr> {
        let mut condition = Condition::all()
            .add(entity::profession::Column::Id.is_in(ids))
            .add(entity::profession::Column::IsAvailable.eq(true));

        if let Some(work_type_id) = work_type_id {
            condition = condition.add(entity::profession::Column::WorkTypeId.eq(work_type_id));
        }

        self.find_active_filtered(condition).await
    }
}
