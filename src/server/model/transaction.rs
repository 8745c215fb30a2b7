use crate::server::model::query::Ordering;

/// Fully validated transaction ready for insertion. `total_cost` has
/// already been computed from quantity and cost-per-unit.
pub struct NewTransaction {
    pub date_id: i32,
    pub material_id: Option<i32>,
    pub tool_id: Option<i32>,
    pub quantity_change: f64,
    pub cost_per_unit: Option<f64>,
    pub total_cost: f64,
    pub transaction_type: String,
    pub notes: Option<String>,
}

/// Field-level change set for a partial update. `None` leaves the stored
/// value untouched; the inner `Option` distinguishes set from cleared.
#[derive(Default)]
pub struct TransactionChanges {
    pub date_id: Option<i32>,
    pub material_id: Option<Option<i32>>,
    pub tool_id: Option<Option<i32>>,
    pub quantity_change: Option<f64>,
    pub cost_per_unit: Option<Option<f64>>,
    pub total_cost: Option<f64>,
    pub transaction_type: Option<String>,
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOrder {
    Id,
    QuantityChange,
    TotalCost,
    TransactionType,
}

impl TransactionOrder {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "transaction_id" => Some(Self::Id),
            "quantity_change" => Some(Self::QuantityChange),
            "total_cost" => Some(Self::TotalCost),
            "transaction_type" => Some(Self::TransactionType),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct TransactionFilter {
    pub date_id: Option<i32>,
    pub date_id_gte: Option<i32>,
    pub date_id_lte: Option<i32>,
    pub material_id: Option<i32>,
    pub tool_id: Option<i32>,
    pub transaction_type: Option<String>,
    pub ordering: Option<Ordering<TransactionOrder>>,
}
