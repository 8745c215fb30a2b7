use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260830_000002_create_dim_discipline_table::DimDiscipline;

static IDX_DIM_MATERIAL_NAME: &str = "idx_dim_material_name";
static IDX_DIM_MATERIAL_DISCIPLINE_ID: &str = "idx_dim_material_discipline_id";
static FK_DIM_MATERIAL_DISCIPLINE_ID: &str = "fk_dim_material_discipline_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DimMaterial::Table)
                    .if_not_exists()
                    .col(pk_auto(DimMaterial::Id))
                    .col(string_len_uniq(DimMaterial::MaterialName, 100))
                    .col(string_len_null(DimMaterial::MaterialType, 50))
                    .col(string_len(DimMaterial::UnitOfMeasure, 20))
                    .col(string_len_null(DimMaterial::Brand, 50))
                    .col(string_len_null(DimMaterial::Color, 50))
                    .col(string_len_null(DimMaterial::Size, 50))
                    .col(integer_null(DimMaterial::DisciplineId))
                    .col(string_len_null(DimMaterial::ImageUrl, 500))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DIM_MATERIAL_NAME)
                    .table(DimMaterial::Table)
                    .col(DimMaterial::MaterialName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DIM_MATERIAL_DISCIPLINE_ID)
                    .table(DimMaterial::Table)
                    .col(DimMaterial::DisciplineId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DIM_MATERIAL_DISCIPLINE_ID)
                    .from_tbl(DimMaterial::Table)
                    .from_col(DimMaterial::DisciplineId)
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
                    .name(FK_DIM_MATERIAL_DISCIPLINE_ID)
                    .table(DimMaterial::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DIM_MATERIAL_DISCIPLINE_ID)
                    .table(DimMaterial::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DIM_MATERIAL_NAME)
                    .table(DimMaterial::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DimMaterial::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DimMaterial {
    Table,
    Id,
    MaterialName,
    MaterialType,
    UnitOfMeasure,
    Brand,
    Color,
    Size,
    DisciplineId,
    ImageUrl,
}
