use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "dim_tool")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tool_name: String,
    pub tool_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub current_location: Option<String>,
    pub purchase_date: Option<Date>,
    pub last_maintenance_date: Option<Date>,
    pub is_calibrated: bool,
    pub discipline_id: Option<i32>,
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
