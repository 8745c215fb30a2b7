use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DisciplineDto {
    pub discipline_id: i32,
    pub discipline_name: String,
    pub discipline_description: Option<String>,
}

impl DisciplineDto {
    pub fn from_model(model: entity::dim_discipline::Model) -> Self {
        Self {
            discipline_id: model.id,
            discipline_name: model.discipline_name,
            discipline_description: model.discipline_description,
        }
    }
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct CreateDisciplineDto {
    pub discipline_name: String,
    pub discipline_description: Option<String>,
}

/// Partial update payload; absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateDisciplineDto {
    pub discipline_name: Option<String>,
    #[serde(default, deserialize_with = "crate::model::double_option")]
    #[schema(value_type = Option<String>)]
    pub discipline_description: Option<Option<String>>,
}

/// Query parameters accepted by the discipline listing endpoint.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct DisciplineListParams {
    /// Case-insensitive substring match over name and description
    pub search: Option<String>,
    /// Field to order by, prefixed with `-` for descending
    pub ordering: Option<String>,
}
