use chrono::NaiveDate;

use crate::server::model::query::Ordering;

pub struct NewDate {
    pub id: i32,
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    Id,
    FullDate,
}

impl DateOrder {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "date_id" => Some(Self::Id),
            "full_date" => Some(Self::FullDate),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct DateFilter {
    pub year: Option<i32>,
    pub full_date_gte: Option<NaiveDate>,
    pub full_date_lte: Option<NaiveDate>,
    pub ordering: Option<Ordering<DateOrder>>,
}
