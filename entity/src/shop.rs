use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shop")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub invented_year: i32,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub mobile: Option<i64>,
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
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::shop_category::Entity")]
    ShopCategory,
    #[sea_orm(has_many = "super::material_stock::Entity")]
    MaterialStock,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::shop_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopCategory.def()
    }
}

impl Related<super::material_stock::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaterialStock.def()
    }
}

impl Related<super::shop_type::Entity> for Entity {
    fn to() -> RelationDef {
        super::shop_category::Relation::ShopType.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::shop_category::Relation::Shop.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
