use crate::server::model::query::Ordering;

pub struct NewDiscipline {
    pub discipline_name: String,
    pub discipline_description: Option<String>,
}

/// Field-level change set for a partial update. `None` leaves the stored
/// value untouched; the inner `Option` distinguishes set from cleared.
#[derive(Default)]
pub struct DisciplineChanges {
    pub discipline_name: Option<String>,
    pub discipline_description: Option<Option<String>>,
}

impl DisciplineChanges {
    /// True when the change set would touch nothing; the store rejects an
    /// update with no assigned columns.
    pub fn is_empty(&self) -> bool {
        self.discipline_name.is_none() && self.discipline_description.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisciplineOrder {
    Id,
    Name,
}

impl DisciplineOrder {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "discipline_id" => Some(Self::Id),
            "discipline_name" => Some(Self::Name),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct DisciplineFilter {
    pub search: Option<String>,
    pub ordering: Option<Ordering<DisciplineOrder>>,
}
