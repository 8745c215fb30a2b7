use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    date::{DateFilter, DateOrder, NewDate},
    query::Ordering,
};

pub struct DateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewDate) -> Result<entity::dim_date::Model, DbErr> {
        let date = entity::dim_date::ActiveModel {
            id: ActiveValue::Set(new.id),
            full_date: ActiveValue::Set(new.full_date),
            year: ActiveValue::Set(new.year),
            month_number: ActiveValue::Set(new.month_number),
            month_name: ActiveValue::Set(new.month_name),
            day_of_month: ActiveValue::Set(new.day_of_month),
            weekday_number: ActiveValue::Set(new.weekday_number),
            weekday_name: ActiveValue::Set(new.weekday_name),
            quarter_number: ActiveValue::Set(new.quarter_number),
            quarter_name: ActiveValue::Set(new.quarter_name),
        };

        date.insert(self.db).await
    }

    pub async fn get_by_id(&self, date_id: i32) -> Result<Option<entity::dim_date::Model>, DbErr> {
        entity::prelude::DimDate::find_by_id(date_id).one(self.db).await
    }

    pub async fn get_by_ids(&self, date_ids: &[i32]) -> Result<Vec<entity::dim_date::Model>, DbErr> {
        entity::prelude::DimDate::find()
            .filter(entity::dim_date::Column::Id.is_in(date_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn get_by_full_date(
        &self,
        full_date: NaiveDate,
    ) -> Result<Option<entity::dim_date::Model>, DbErr> {
        entity::prelude::DimDate::find()
            .filter(entity::dim_date::Column::FullDate.eq(full_date))
            .one(self.db)
            .await
    }

    pub async fn list(&self, filter: &DateFilter) -> Result<Vec<entity::dim_date::Model>, DbErr> {
        let mut query = entity::prelude::DimDate::find();

        if let Some(year) = filter.year {
            query = query.filter(entity::dim_date::Column::Year.eq(year));
        }
        if let Some(gte) = filter.full_date_gte {
            query = query.filter(entity::dim_date::Column::FullDate.gte(gte));
        }
        if let Some(lte) = filter.full_date_lte {
            query = query.filter(entity::dim_date::Column::FullDate.lte(lte));
        }

        if let Some(Ordering { field, descending }) = filter.ordering {
            let column = match field {
                DateOrder::Id => entity::dim_date::Column::Id,
                DateOrder::FullDate => entity::dim_date::Column::FullDate,
            };
            query = if descending {
                query.order_by_desc(column)
            } else {
                query.order_by_asc(column)
            };
        }

        query
            .order_by_asc(entity::dim_date::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a date; the store cascades the delete to any transactions
    /// referencing it.
    pub async fn delete(&self, date_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DimDate::delete_by_id(date_id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::DbErr;

    use crate::server::{
        data::date::DateRepository,
        model::{
            date::{DateFilter, DateOrder},
            query::Ordering,
        },
        util::test::{
            fixture::{insert_date, new_date},
            setup::test_setup_with_tables,
        },
    };

    /// Expect success inserting a date with an externally assigned id
    #[tokio::test]
    async fn create_date() -> Result<(), DbErr> {
        let test = test_setup_with_tables().await?;
        let date_repo = DateRepository::new(&test.state.db);

        let date = date_repo
            .create(new_date(20260301, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()))
            .await?;

        assert_eq!(date.id, 20260301);
        assert_eq!(date.year, 2026);

        Ok(())
    }

    /// Expect error when inserting a second row for the same calendar date
    #[tokio::test]
    async fn create_date_duplicate_full_date_error() -> Result<(), DbErr> {
        let test = test_setup_with_tables().await?;
        let date_repo = DateRepository::new(&test.state.db);

        let full_date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        date_repo.create(new_date(1, full_date)).await?;

        let result = date_repo.create(new_date(2, full_date)).await;

        assert!(result.is_err(), "Expected error, instead got: {:?}", result);

        Ok(())
    }

    /// Expect range filter to bound the listing inclusively on both ends
    #[tokio::test]
    async fn list_dates_range_filter() -> Result<(), DbErr> {
        let test = test_setup_with_tables().await?;

        for day in 1..=5 {
            insert_date(
                &test.state.db,
                day,
                NaiveDate::from_ymd_opt(2026, 3, day as u32).unwrap(),
            )
            .await?;
        }

        let date_repo = DateRepository::new(&test.state.db);
        let filter = DateFilter {
            full_date_gte: NaiveDate::from_ymd_opt(2026, 3, 2),
            full_date_lte: NaiveDate::from_ymd_opt(2026, 3, 4),
            ..Default::default()
        };

        let dates = date_repo.list(&filter).await?;

        assert_eq!(dates.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2, 3, 4]);

        Ok(())
    }

    /// Expect descending ordering on full_date
    #[tokio::test]
    async fn list_dates_ordering_descending() -> Result<(), DbErr> {
        let test = test_setup_with_tables().await?;

        for day in 1..=3 {
            insert_date(
                &test.state.db,
                day,
                NaiveDate::from_ymd_opt(2026, 3, day as u32).unwrap(),
            )
            .await?;
        }

        let date_repo = DateRepository::new(&test.state.db);
        let filter = DateFilter {
            ordering: Some(Ordering {
                field: DateOrder::FullDate,
                descending: true,
            }),
            ..Default::default()
        };

        let dates = date_repo.list(&filter).await?;

        assert_eq!(dates.iter().map(|d| d.id).collect::<Vec<_>>(), vec![3, 2, 1]);

        Ok(())
    }
}
