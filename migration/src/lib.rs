pub use sea_orm_migration::prelude::*;

mod m20260830_000001_create_dim_date_table;
mod m20260830_000002_create_dim_discipline_table;
mod m20260830_000003_create_dim_material_table;
mod m20260830_000004_create_dim_tool_table;
mod m20260830_000005_create_fact_inventory_transaction_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260830_000001_create_dim_date_table::Migration),
            Box::new(m20260830_000002_create_dim_discipline_table::Migration),
            Box::new(m20260830_000003_create_dim_material_table::Migration),
            Box::new(m20260830_000004_create_dim_tool_table::Migration),
            Box::new(m20260830_000005_create_fact_inventory_transaction_table::Migration),
        ]
    }
}
