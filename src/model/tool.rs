use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::discipline::DisciplineDto;

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ToolDto {
    pub tool_id: i32,
    pub tool_name: String,
    pub tool_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub current_location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub is_calibrated: bool,
    pub discipline: Option<DisciplineDto>,
}

impl ToolDto {
    pub fn from_model(model: entity::dim_tool::Model, discipline: Option<DisciplineDto>) -> Self {
        Self {
            tool_id: model.id,
            tool_name: model.tool_name,
            tool_type: model.tool_type,
            brand: model.brand,
            model: model.model,
            current_location: model.current_location,
            purchase_date: model.purchase_date,
            last_maintenance_date: model.last_maintenance_date,
            is_calibrated: model.is_calibrated,
            discipline,
        }
    }
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct CreateToolDto {
    pub tool_name: String,
    pub tool_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub current_location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    /// Defaults to false when omitted
    pub is_calibrated: Option<bool>,
    pub discipline_id: Option<i32>,
}

/// Partial update payload; absent fields keep their stored values, explicit
/// nulls clear the optional ones.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateToolDto {
    pub tool_name: Option<String>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<String>)]
    pub tool_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<String>)]
    pub brand: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<String>)]
    pub model: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<String>)]
    pub current_location: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<NaiveDate>)]
    pub purchase_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<NaiveDate>)]
    pub last_maintenance_date: Option<Option<NaiveDate>>,
    pub is_calibrated: Option<bool>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<i32>)]
    pub discipline_id: Option<Option<i32>>,
}

/// Query parameters accepted by the tool listing endpoint.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ToolListParams {
    /// Exact-match filter on the referenced discipline id
    pub discipline__discipline_id: Option<String>,
    /// Exact-match filter on tool type
    pub tool_type: Option<String>,
    /// Exact-match filter on brand
    pub brand: Option<String>,
    /// Case-insensitive substring match over name, type, brand, and model
    pub search: Option<String>,
    /// Field to order by, prefixed with `-` for descending
    pub ordering: Option<String>,
}
