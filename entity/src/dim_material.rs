use sea_orm::entity::prelude::*;

/// Material dimension. Current stock is never stored here; it is derived
/// from `fact_inventory_transaction` rows at read time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "dim_material")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub material_name: String,
    pub material_type: Option<String>,
    pub unit_of_measure: String,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub discipline_id: Option<i32>,
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dim_discipline::Entity",
        from = "Column::DisciplineId",
        to = "super::dim_discipline::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    DimDiscipline,
    #[sea_orm(has_many = "super::fact_inventory_transaction::Entity")]
    FactInventoryTransaction,
}

impl Related<super::dim_discipline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DimDiscipline.def()
    }
}

impl Related<super::fact_inventory_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FactInventoryTransaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
