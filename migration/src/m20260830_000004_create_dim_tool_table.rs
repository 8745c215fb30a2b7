use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000002_create_dim_discipline_table::DimDiscipline;

static IDX_DIM_TOOL_NAME: &str = "idx_dim_tool_name";
static IDX_DIM_TOOL_DISCIPLINE_ID: &str = "idx_dim_tool_discipline_id";
static FK_DIM_TOOL_DISCIPLINE_ID: &str = "fk_dim_tool_discipline_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DimTool::Table)
                    .if_not_exists()
                    .col(pk_auto(DimTool::Id))
                    // Tool names are intentionally not unique; workshops own duplicates
                    .col(string_len(DimTool::ToolName, 100))
                    .col(string_len_null(DimTool::ToolType, 50))
                    .col(string_len_null(DimTool::Brand, 50))
                    .col(string_len_null(DimTool::Model, 50))
                    .col(string_len_null(DimTool::CurrentLocation, 100))
                    .col(date_null(DimTool::PurchaseDate))
                    .col(date_null(DimTool::LastMaintenanceDate))
                    .col(boolean(DimTool::IsCalibrated).default(false))
                    .col(integer_null(DimTool::DisciplineId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DIM_TOOL_NAME)
                    .table(DimTool::Table)
                    .col(DimTool::ToolName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DIM_TOOL_DISCIPLINE_ID)
                    .table(DimTool::Table)
                    .col(DimTool::DisciplineId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DIM_TOOL_DISCIPLINE_ID)
                    .from_tbl(DimTool::Table)
                    .from_col(DimTool::DisciplineId)
                    .to_tbl(DimDiscipline::Table)
                    .to_col(DimDiscipline::Id)
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
                    .name(FK_DIM_TOOL_DISCIPLINE_ID)
                    .table(DimTool::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DIM_TOOL_DISCIPLINE_ID)
                    .table(DimTool::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DIM_TOOL_NAME)
                    .table(DimTool::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DimTool::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DimTool {
    Table,
    Id,
    ToolName,
    ToolType,
    Brand,
    Model,
    CurrentLocation,
    PurchaseDate,
    LastMaintenanceDate,
    IsCalibrated,
    DisciplineId,
}
