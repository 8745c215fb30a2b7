use chrono::NaiveDate;

use crate::server::model::query::Ordering;

pub struct NewTool {
    pub tool_name: String,
    pub tool_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub current_location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub is_calibrated: bool,
    pub discipline_id: Option<i32>,
}

/// Field-level change set for a partial update. `None` leaves the stored
/// value untouched; the inner `Option` distinguishes set from cleared.
#[derive(Default)]
pub struct ToolChanges {
    pub tool_name: Option<String>,
    pub tool_type: Option<Option<String>>,
    pub brand: Option<Option<String>>,
    pub model: Option<Option<String>>,
    pub current_location: Option<Option<String>>,
    pub purchase_date: Option<Option<NaiveDate>>,
    pub last_maintenance_date: Option<Option<NaiveDate>>,
    pub is_calibrated: Option<bool>,
    pub discipline_id: Option<Option<i32>>,
}

impl ToolChanges {
    /// True when the change set would touch nothing; the store rejects an
    /// update with no assigned columns.
    pub fn is_empty(&self) -> bool {
        self.tool_name.is_none()
            && self.tool_type.is_none()
            && self.brand.is_none()
            && self.model.is_none()
            && self.current_location.is_none()
            && self.purchase_date.is_none()
            && self.last_maintenance_date.is_none()
            && self.is_calibrated.is_none()
            && self.discipline_id.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOrder {
    Id,
    Name,
    Type,
    Brand,
}

impl ToolOrder {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tool_id" => Some(Self::Id),
            "tool_name" => Some(Self::Name),
            "tool_type" => Some(Self::Type),
            "brand" => Some(Self::Brand),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct ToolFilter {
    pub discipline_id: Option<i32>,
    pub tool_type: Option<String>,
    pub brand: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<Ordering<ToolOrder>>,
}
