use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profession")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub work_type_id: i32,
    pub work_experience: f64,
    pub expected_salary: i32,
    pub is_available: bool,
    pub gender: String,
    pub user_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::work_type::Entity",
        from = "Column::WorkTypeId",
        to = "super::work_type::Column::Id"
    )]
    WorkType,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::work_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkType.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
