use serde::{Deserialize, Serialize};

use crate::model::{date::DateRefDto, material::MaterialDto, tool::ToolDto};

/// Inventory transaction fact with its referenced dimensions embedded.
/// Exactly one of `material` / `tool` is present.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TransactionDto {
    pub transaction_id: i32,
    pub date: DateRefDto,
    pub material: Option<MaterialDto>,
    pub tool: Option<ToolDto>,
    pub quantity_change: f64,
    pub cost_per_unit: Option<f64>,
    pub total_cost: f64,
    pub transaction_type: String,
    pub notes: Option<String>,
}

/// Payload for recording an inventory event. References dimensions by id;
/// exactly one of `material_id` / `tool_id` must be given. `total_cost` is
/// always computed server-side.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct CreateTransactionDto {
    pub date_id: i32,
    pub material_id: Option<i32>,
    pub tool_id: Option<i32>,
    pub quantity_change: f64,
    pub cost_per_unit: Option<f64>,
    pub transaction_type: String,
    pub notes: Option<String>,
}

/// Partial update payload. Changing `material_id` / `tool_id` is re-checked
/// against the exactly-one rule after the patch is applied.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateTransactionDto {
    pub date_id: Option<i32>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<i32>)]
    pub material_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<i32>)]
    pub tool_id: Option<Option<i32>>,
    pub quantity_change: Option<f64>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<f64>)]
    pub cost_per_unit: Option<Option<f64>>,
    pub transaction_type: Option<String>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

/// Query parameters accepted by the transaction listing endpoint.
///
/// Id-valued filters arrive as raw strings and are parsed leniently; a
/// malformed value is treated as if the filter were absent.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct TransactionListParams {
    /// Exact-match filter on the referenced date id
    pub date__date_id: Option<String>,
    /// Lower bound (inclusive) on the referenced date id
    pub date__date_id__gte: Option<String>,
    /// Upper bound (inclusive) on the referenced date id
    pub date__date_id__lte: Option<String>,
    /// Exact-match filter on the referenced material id
    pub material__material_id: Option<String>,
    /// Exact-match filter on the referenced tool id
    pub tool__tool_id: Option<String>,
    /// Exact-match filter on the transaction type
    pub transaction_type: Option<String>,
    /// Field to order by, prefixed with `-` for descending
    pub ordering: Option<String>,
}
