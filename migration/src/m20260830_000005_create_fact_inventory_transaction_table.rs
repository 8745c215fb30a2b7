use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260830_000001_create_dim_date_table::DimDate,
    m20260830_000003_create_dim_material_table::DimMaterial,
    m20260830_000004_create_dim_tool_table::DimTool,
};

static IDX_FACT_TRANSACTION_DATE_ID: &str = "idx_fact_inventory_transaction_date_id";
static IDX_FACT_TRANSACTION_MATERIAL_ID: &str = "idx_fact_inventory_transaction_material_id";
static IDX_FACT_TRANSACTION_TOOL_ID: &str = "idx_fact_inventory_transaction_tool_id";
static FK_FACT_TRANSACTION_DATE_ID: &str = "fk_fact_inventory_transaction_date_id";
static FK_FACT_TRANSACTION_MATERIAL_ID: &str = "fk_fact_inventory_transaction_material_id";
static FK_FACT_TRANSACTION_TOOL_ID: &str = "fk_fact_inventory_transaction_tool_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FactInventoryTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(FactInventoryTransaction::Id))
                    .col(integer(FactInventoryTransaction::DateId))
                    .col(integer_null(FactInventoryTransaction::MaterialId))
                    .col(integer_null(FactInventoryTransaction::ToolId))
                    .col(double(FactInventoryTransaction::QuantityChange))
                    .col(double_null(FactInventoryTransaction::CostPerUnit))
                    .col(double(FactInventoryTransaction::TotalCost))
                    .col(string_len(FactInventoryTransaction::TransactionType, 50))
                    .col(text_null(FactInventoryTransaction::Notes))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FACT_TRANSACTION_DATE_ID)
                    .table(FactInventoryTransaction::Table)
                    .col(FactInventoryTransaction::DateId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FACT_TRANSACTION_MATERIAL_ID)
                    .table(FactInventoryTransaction::Table)
                    .col(FactInventoryTransaction::MaterialId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FACT_TRANSACTION_TOOL_ID)
                    .table(FactInventoryTransaction::Table)
                    .col(FactInventoryTransaction::ToolId)
                    .to_owned(),
            )
            .await?;

        // Deleting a date removes its transactions; deleting a material or
        // tool keeps the row and nulls the reference.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FACT_TRANSACTION_DATE_ID)
                    .from_tbl(FactInventoryTransaction::Table)
                    .from_col(FactInventoryTransaction::DateId)
                    .to_tbl(DimDate::Table)
                    .to_col(DimDate::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FACT_TRANSACTION_MATERIAL_ID)
                    .from_tbl(FactInventoryTransaction::Table)
                    .from_col(FactInventoryTransaction::MaterialId)
                    .to_tbl(DimMaterial::Table)
                    .to_col(DimMaterial::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FACT_TRANSACTION_TOOL_ID)
                    .from_tbl(FactInventoryTransaction::Table)
                    .from_col(FactInventoryTransaction::ToolId)
                    .to_tbl(DimTool::Table)
                    .to_col(DimTool::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FACT_TRANSACTION_TOOL_ID)
                    .table(FactInventoryTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FACT_TRANSACTION_MATERIAL_ID)
                    .table(FactInventoryTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FACT_TRANSACTION_DATE_ID)
                    .table(FactInventoryTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FACT_TRANSACTION_TOOL_ID)
                    .table(FactInventoryTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FACT_TRANSACTION_MATERIAL_ID)
                    .table(FactInventoryTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FACT_TRANSACTION_DATE_ID)
                    .table(FactInventoryTransaction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(FactInventoryTransaction::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FactInventoryTransaction {
    Table,
    Id,
    DateId,
    MaterialId,
    ToolId,
    QuantityChange,
    CostPerUnit,
    TotalCost,
    TransactionType,
    Notes,
}
