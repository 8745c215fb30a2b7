pub use super::dim_date::Entity as DimDate;
pub use super::dim_discipline::Entity as DimDiscipline;
pub use super::dim_material::Entity as DimMaterial;
pub use super::dim_tool::Entity as DimTool;
pub use super::fact_inventory_transaction::Entity as FactInventoryTransaction;
