use sea_orm_migration::{prelude::*, schema::*};

static IDX_DIM_DATE_FULL_DATE: &str = "idx_dim_date_full_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DimDate::Table)
                    .if_not_exists()
                    // Date ids are assigned by the reference data load, not the store
                    .col(integer(DimDate::Id).primary_key())
                    .col(date(DimDate::FullDate))
                    .col(integer(DimDate::Year))
                    .col(integer(DimDate::MonthNumber))
                    .col(string_len(DimDate::MonthName, 20))
                    .col(integer(DimDate::DayOfMonth))
                    .col(integer(DimDate::WeekdayNumber))
                    .col(string_len(DimDate::WeekdayName, 20))
                    .col(integer_null(DimDate::QuarterNumber))
                    .col(string_len_null(DimDate::QuarterName, 20))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DIM_DATE_FULL_DATE)
                    .table(DimDate::Table)
                    .col(DimDate::FullDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DIM_DATE_FULL_DATE)
                    .table(DimDate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DimDate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DimDate {
    Table,
    Id,
    FullDate,
    Year,
    MonthNumber,
    MonthName,
    DayOfMonth,
    WeekdayNumber,
    WeekdayName,
    QuarterNumber,
    QuarterName,
}
