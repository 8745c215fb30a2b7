use sea_orm_migration::{prelude::*, schema::*};

static IDX_DIM_DISCIPLINE_NAME: &str = "idx_dim_discipline_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DimDiscipline::Table)
                    .if_not_exists()
                    .col(pk_auto(DimDiscipline::Id))
                    .col(string_len_uniq(DimDiscipline::DisciplineName, 50))
                    .col(text_null(DimDiscipline::DisciplineDescription))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DIM_DISCIPLINE_NAME)
                    .table(DimDiscipline::Table)
                    .col(DimDiscipline::DisciplineName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DIM_DISCIPLINE_NAME)
                    .table(DimDiscipline::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DimDiscipline::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DimDiscipline {
    Table,
    Id,
    DisciplineName,
    DisciplineDescription,
}
