use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "material_stock")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub shop_type_id: i32,
    pub name: String,
    pub stock: String,
    pub rate: f64,
    pub brand: String,
    pub shop_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shop_type::Entity",
        from = "Column::ShopTypeId",
        to = "super::shop_type::Column::Id"
    )]
    ShopType,
    #[sea_orm(
        belongs_to = "super::shop::Entity",
        from = "Column::ShopId",
        to = "super::shop::Column::Id"
    )]
    Shop,
}

impl Related<super::shop_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopType.def()
    }
}

impl Related<super::shop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shop.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
