use sea_orm::entity::prelude::*;

/// Which kind of row an address belongs to.
///
/// Stored as an integer discriminant; `owner_id` points at a `user`,
/// `profession`, or `shop` row depending on the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum OwnerKind {
    #[sea_orm(num_value = 1)]
    HomeOwner,
    #[sea_orm(num_value = 2)]
    WorkPlace,
    #[sea_orm(num_value = 3)]
    ShopSite,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub building_number: Option<String>,
    pub street: Option<String>,
    pub village_area: Option<String>,
    pub city: String,
    pub landmark: String,
    pub district: String,
    pub state: String,
    pub pincode: i32,
    pub owner_kind: OwnerKind,
    pub owner_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::job::Entity")]
    Job,
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
