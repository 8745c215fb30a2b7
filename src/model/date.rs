use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Full calendar date dimension record.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DateDto {
    pub date_id: i32,
    pub full_date: NaiveDate,
    pub year: i32,
    pub month_number: i32,
    pub month_name: String,
    pub day_of_month: i32,
    pub weekday_number: i32,
    pub weekday_name: String,
    pub quarter_number: Option<i32>,
    pub quarter_name: Option<String>,
}

/// Compact date reference embedded in transaction responses.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DateRefDto {
    pub date_id: i32,
    pub full_date: NaiveDate,
}

impl DateDto {
    pub fn from_model(model: entity::dim_date::Model) -> Self {
        Self {
            date_id: model.id,
            full_date: model.full_date,
            year: model.year,
            month_number: model.month_number,
            month_name: model.month_name,
            day_of_month: model.day_of_month,
            weekday_number: model.weekday_number,
            weekday_name: model.weekday_name,
            quarter_number: model.quarter_number,
            quarter_name: model.quarter_name,
        }
    }
}

impl DateRefDto {
    pub fn from_model(model: &entity::dim_date::Model) -> Self {
        Self {
            date_id: model.id,
            full_date: model.full_date,
        }
    }
}

/// Payload for loading a date dimension row. Ids are assigned by the caller
/// so bulk-loaded reference data keeps its external numbering.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct CreateDateDto {
    pub date_id: i32,
    pub full_date: NaiveDate,
    pub year: i32,
    pub month_number: i32,
    pub month_name: String,
    pub day_of_month: i32,
    pub weekday_number: i32,
    pub weekday_name: String,
    pub quarter_number: Option<i32>,
    pub quarter_name: Option<String>,
}

/// Query parameters accepted by the date listing endpoint.
///
/// Numeric and date-valued filters arrive as raw strings and are parsed
/// leniently; a malformed value is treated as if the filter were absent.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct DateListParams {
    /// Exact-match filter on the calendar year
    pub year: Option<String>,
    /// Lower bound (inclusive) on the calendar date
    pub full_date__gte: Option<String>,
    /// Upper bound (inclusive) on the calendar date
    pub full_date__lte: Option<String>,
    /// Field to order by, prefixed with `-` for descending
    pub ordering: Option<String>,
}
