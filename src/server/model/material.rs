use crate::server::model::query::Ordering;

pub struct NewMaterial {
    pub material_name: String,
    pub material_type: Option<String>,
    pub unit_of_measure: String,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub discipline_id: Option<i32>,
    pub image_url: Option<String>,
}

/// Field-level change set for a partial update. `None` leaves the stored
/// value untouched; the inner `Option` distinguishes set from cleared.
#[derive(Default)]
pub struct MaterialChanges {
    pub material_name: Option<String>,
    pub material_type: Option<Option<String>>,
    pub unit_of_measure: Option<String>,
    pub brand: Option<Option<String>>,
    pub color: Option<Option<String>>,
    pub size: Option<Option<String>>,
    pub discipline_id: Option<Option<i32>>,
    pub image_url: Option<Option<String>>,
}

impl MaterialChanges {
    /// True when the change set would touch nothing; the store rejects an
    /// update with no assigned columns.
    pub fn is_empty(&self) -> bool {
        self.material_name.is_none()
            && self.material_type.is_none()
            && self.unit_of_measure.is_none()
            && self.brand.is_none()
            && self.color.is_none()
            && self.size.is_none()
            && self.discipline_id.is_none()
            && self.image_url.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialOrder {
    Id,
    Name,
    Type,
    Brand,
    /// Derived aggregate; applied in the service after stock figures are
    /// attached rather than pushed into the query
    CurrentStock,
}

impl MaterialOrder {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "material_id" => Some(Self::Id),
            "material_name" => Some(Self::Name),
            "material_type" => Some(Self::Type),
            "brand" => Some(Self::Brand),
            "current_stock" => Some(Self::CurrentStock),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct MaterialFilter {
    pub discipline_id: Option<i32>,
    pub material_type: Option<String>,
    pub brand: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<Ordering<MaterialOrder>>,
}
