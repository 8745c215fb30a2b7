use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "dim_discipline")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub discipline_name: String,
    pub discipline_description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dim_material::Entity")]
    DimMaterial,
    #[sea_orm(has_many = "super::dim_tool::Entity")]
    DimTool,
}

impl Related<super::dim_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DimMaterial.def()
    }
}

impl Related<super::dim_tool::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DimTool.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
