use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "job")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub work_type_id: i32,
    pub number_of_workers: i32,
    pub workers_remaining: i32,
    pub work_date: Date,
    pub working_days: i32,
    pub work_pay: f64,
    pub address_id: i32,
    pub requestor_id: i32,
    pub job_status: String,
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
        belongs_to = "super::address::Entity",
        from = "Column::AddressId",
        to = "super::address::Column::Id"
    )]
    Address,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RequestorId",
        to = "super::user::Column::Id"
    )]
    Requestor,
    #[sea_orm(has_many = "super::job_acceptor::Entity")]
    JobAcceptor,
}

impl Related<super::work_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkType.def()
    }
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Requestor.def()
    }
}

impl Related<super::job_acceptor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobAcceptor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
