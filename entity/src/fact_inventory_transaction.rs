use sea_orm::entity::prelude::*;

/// Inventory transaction fact. Exactly one of `material_id` / `tool_id` is
/// set on every row; the rule is enforced in the validation layer before
/// anything reaches the store.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fact_inventory_transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date_id: i32,
    pub material_id: Option<i32>,
    pub tool_id: Option<i32>,
    pub quantity_change: f64,
    pub cost_per_unit: Option<f64>,
    pub total_cost: f64,
    pub transaction_type: String,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dim_date::Entity",
        from = "Column::DateId",
        to = "super::dim_date::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DimDate,
    #[sea_orm(
        belongs_to = "super::dim_material::Entity",
        from = "Column::MaterialId",
        to = "super::dim_material::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    DimMaterial,
    #[sea_orm(
        belongs_to = "super::dim_tool::Entity",
        from = "Column::ToolId",
        to = "super::dim_tool::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    DimTool,
}

impl Related<super::dim_date::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DimDate.def()
    }
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
