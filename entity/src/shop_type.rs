use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shop_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shop_category::Entity")]
    ShopCategory,
    #[sea_orm(has_many = "super::material_stock::Entity")]
    MaterialStock,
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

impl ActiveModelBehavior for ActiveModel {}
