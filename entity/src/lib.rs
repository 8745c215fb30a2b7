pub mod prelude;

pub mod dim_date;
pub mod dim_discipline;
pub mod dim_material;
pub mod dim_tool;
pub mod fact_inventory_transaction;
