use sea_orm::entity::prelude::*;

/// Calendar date dimension. Rows are externally assigned ids (bulk-loaded
/// reference data), so the primary key is not auto-incrementing.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "dim_date")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(unique)]
    pub full_date: Date,
    pub year: i32,
    pub month_number: i32,
    pub month_name: String,
    pub day_of_month: i32,
    pub weekday_number: i32,
    pub weekday_name: String,
    pub quarter_number: Option<i32>,
    pub quarter_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fact_inventory_transaction::Entity")]
    FactInventoryTransaction,
}

impl Related<super::fact_inventory_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FactInventoryTransaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
