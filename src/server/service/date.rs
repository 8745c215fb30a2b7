use sea_orm::DatabaseConnection;

use crate::{
    model::date::{CreateDateDto, DateDto, DateListParams},
    server::{
        data::date::DateRepository,
        error::{validation::ValidationError, Error},
        model::{
            date::{DateFilter, DateOrder, NewDate},
            query::{parse_date_filter, parse_id_filter, parse_ordering},
        },
        service::{check_length, check_required},
    },
};

/// Service for the calendar date dimension. Dates are externally numbered
/// reference data: they can be loaded, listed, and pruned, never updated.
pub struct DateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateDateDto) -> Result<DateDto, Error> {
        check_required("month_name", &dto.month_name, 20)?;
        check_required("weekday_name", &dto.weekday_name, 20)?;
        if let Some(quarter_name) = dto.quarter_name.as_deref() {
            check_length("quarter_name", quarter_name, 20)?;
        }

        let date_repo = DateRepository::new(self.db);

        if date_repo.get_by_id(dto.date_id).await?.is_some() {
            return Err(ValidationError::Duplicate { field: "date_id" }.into());
        }
        if date_repo.get_by_full_date(dto.full_date).await?.is_some() {
            return Err(ValidationError::Duplicate { field: "full_date" }.into());
        }

        let date = date_repo
            .create(NewDate {
                id: dto.date_id,
                full_date: dto.full_date,
                year: dto.year,
                month_number: dto.month_number,
                month_name: dto.month_name,
                day_of_month: dto.day_of_month,
                weekday_number: dto.weekday_number,
                weekday_name: dto.weekday_name,
                quarter_number: dto.quarter_number,
                quarter_name: dto.quarter_name,
            })
            .await?;

        Ok(DateDto::from_model(date))
    }

    pub async fn get(&self, date_id: i32) -> Result<DateDto, Error> {
        let date = DateRepository::new(self.db)
            .get_by_id(date_id)
            .await?
            .ok_or(Error::NotFound("date"))?;

        Ok(DateDto::from_model(date))
    }

    pub async fn list(&self, params: &DateListParams) -> Result<Vec<DateDto>, Error> {
        let filter = DateFilter {
            year: parse_id_filter(params.year.as_deref()),
            full_date_gte: parse_date_filter(params.full_date__gte.as_deref()),
            full_date_lte: parse_date_filter(params.full_date__lte.as_deref()),
            ordering: params
                .ordering
                .as_deref()
                .and_then(|raw| parse_ordering(raw, DateOrder::from_name)),
        };

        let dates = DateRepository::new(self.db).list(&filter).await?;

        Ok(dates.into_iter().map(DateDto::from_model).collect())
    }

    pub async fn delete(&self, date_id: i32) -> Result<(), Error> {
        let result = DateRepository::new(self.db).delete(date_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound("date"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        model::date::{CreateDateDto, DateListParams},
        server::{
            error::{validation::ValidationError, Error},
            service::date::DateService,
            util::test::{fixture::insert_date, setup::test_setup_with_tables},
        },
    };

    fn march_first() -> CreateDateDto {
        CreateDateDto {
            date_id: 20260301,
            full_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            year: 2026,
            month_number: 3,
            month_name: "March".to_string(),
            day_of_month: 1,
            weekday_number: 7,
            weekday_name: "Sunday".to_string(),
            quarter_number: Some(1),
            quarter_name: Some("Q1".to_string()),
        }
    }

    /// Expect success loading a date row with its external id
    #[tokio::test]
    async fn create_date() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;
        let date_service = DateService::new(&test.state.db);

        let date = date_service.create(march_first()).await?;

        assert_eq!(date.date_id, 20260301);
        assert_eq!(date.month_name, "March");

        Ok(())
    }

    /// Expect a duplicate calendar date to be rejected with a field message
    #[tokio::test]
    async fn create_date_duplicate_full_date() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;
        let date_service = DateService::new(&test.state.db);

        date_service.create(march_first()).await?;

        let mut second = march_first();
        second.date_id = 20260302;
        let result = date_service.create(second).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::Duplicate {
                field: "full_date"
            }))
        ));

        Ok(())
    }

    /// Expect a malformed year filter to be ignored rather than rejected
    #[tokio::test]
    async fn list_dates_malformed_year_filter_ignored() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;

        insert_date(
            &test.state.db,
            1,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
        .await?;

        let date_service = DateService::new(&test.state.db);
        let params = DateListParams {
            year: Some("not-a-year".to_string()),
            ..Default::default()
        };

        let dates = date_service.list(&params).await?;

        assert_eq!(dates.len(), 1);

        Ok(())
    }

    /// Expect 404-style error when deleting an unknown date
    #[tokio::test]
    async fn delete_date_unknown() -> Result<(), Error> {
        let test = test_setup_with_tables().await?;
        let date_service = DateService::new(&test.state.db);

        let result = date_service.delete(1).await;

        assert!(matches!(result, Err(Error::NotFound("date"))));

        Ok(())
    }
}
