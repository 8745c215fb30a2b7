use serde::{Deserialize, Serialize};

use crate::model::discipline::DisciplineDto;

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MaterialDto {
    pub material_id: i32,
    pub material_name: String,
    pub material_type: Option<String>,
    pub unit_of_measure: String,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub discipline: Option<DisciplineDto>,
    pub image_url: Option<String>,
    /// Derived sum of signed quantity changes; omitted where it is not
    /// computed (nested inside transaction responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stock: Option<f64>,
}

impl MaterialDto {
    pub fn from_model(
        model: entity::dim_material::Model,
        discipline: Option<DisciplineDto>,
        current_stock: Option<f64>,
    ) -> Self {
        Self {
            material_id: model.id,
            material_name: model.material_name,
            material_type: model.material_type,
            unit_of_measure: model.unit_of_measure,
            brand: model.brand,
            color: model.color,
            size: model.size,
            discipline,
            image_url: model.image_url,
            current_stock,
        }
    }
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct CreateMaterialDto {
    pub material_name: String,
    pub material_type: Option<String>,
    pub unit_of_measure: String,
    pub brand: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub discipline_id: Option<i32>,
    pub image_url: Option<String>,
}

/// Partial update payload; absent fields keep their stored values, explicit
/// nulls clear the optional ones.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateMaterialDto {
    pub material_name: Option<String>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<String>)]
    pub material_type: Option<Option<String>>,
    pub unit_of_measure: Option<String>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<String>)]
    pub brand: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<String>)]
    pub color: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<String>)]
    pub size: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<i32>)]
    pub discipline_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
}

/// Query parameters accepted by the material listing endpoint.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct MaterialListParams {
    /// Exact-match filter on the referenced discipline id
    pub discipline__discipline_id: Option<String>,
    /// Exact-match filter on material type
    pub material_type: Option<String>,
    /// Exact-match filter on brand
    pub brand: Option<String>,
    /// Case-insensitive substring match over name, type, and brand
    pub search: Option<String>,
    /// Field to order by, prefixed with `-` for descending;
    /// `current_stock` sorts on the derived aggregate
    pub ordering: Option<String>,
}
