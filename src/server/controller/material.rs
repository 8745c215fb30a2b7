use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        material::{CreateMaterialDto, MaterialDto, MaterialListParams, UpdateMaterialDto},
    },
    server::{
        controller::util::extract::ValidJson, error::Error, model::app::AppState,
        service::material::MaterialService,
    },
};

pub static MATERIAL_TAG: &str = "materials";

/// List materials with filters, search, and ordering; each row carries its
/// derived current stock
#[utoipa::path(
    get,
    path = "/api/materials/",
    tag = MATERIAL_TAG,
    params(MaterialListParams),
    responses(
        (status = 200, description = "Success when listing materials", body = Vec<MaterialDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_materials(
    State(state): State<AppState>,
    Query(params): Query<MaterialListParams>,
) -> Result<impl IntoResponse, Error> {
    let materials = MaterialService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(materials)))
}

/// Create a material
#[utoipa::path(
    post,
    path = "/api/materials/",
    tag = MATERIAL_TAG,
    request_body = CreateMaterialDto,
    responses(
        (status = 201, description = "Success when creating a material", body = MaterialDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_material(
    State(state): State<AppState>,
    ValidJson(dto): ValidJson<CreateMaterialDto>,
) -> Result<impl IntoResponse, Error> {
    let material = MaterialService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(material)))
}

/// Retrieve a material by id with its derived current stock
#[utoipa::path(
    get,
    path = "/api/materials/{material_id}/",
    tag = MATERIAL_TAG,
    params(("material_id" = i32, Path, description = "Material id")),
    responses(
        (status = 200, description = "Success when retrieving a material", body = MaterialDto),
        (status = 404, description = "Material not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_material(
    State(state): State<AppState>,
    Path(material_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let material = MaterialService::new(&state.db).get(material_id).await?;

    Ok((StatusCode::OK, Json(material)))
}

/// Replace fields of a material; absent fields are retained
#[utoipa::path(
    put,
    path = "/api/materials/{material_id}/",
    tag = MATERIAL_TAG,
    params(("material_id" = i32, Path, description = "Material id")),
    request_body = UpdateMaterialDto,
    responses(
        (status = 200, description = "Success when updating a material", body = MaterialDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 404, description = "Material not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_material(
    State(state): State<AppState>,
    Path(material_id): Path<i32>,
    ValidJson(dto): ValidJson<UpdateMaterialDto>,
) -> Result<impl IntoResponse, Error> {
    let material = MaterialService::new(&state.db).update(material_id, dto).await?;

    Ok((StatusCode::OK, Json(material)))
}

/// Partially update a material
#[utoipa::path(
    patch,
    path = "/api/materials/{material_id}/",
    tag = MATERIAL_TAG,
    params(("material_id" = i32, Path, description = "Material id")),
    request_body = UpdateMaterialDto,
    responses(
        (status = 200, description = "Success when updating a material", body = MaterialDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 404, description = "Material not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_material(
    State(state): State<AppState>,
    Path(material_id): Path<i32>,
    ValidJson(dto): ValidJson<UpdateMaterialDto>,
) -> Result<impl IntoResponse, Error> {
    let material = MaterialService::new(&state.db).update(material_id, dto).await?;

    Ok((StatusCode::OK, Json(material)))
}

/// Delete a material, detaching its transactions
#[utoipa::path(
    delete,
    path = "/api/materials/{material_id}/",
    tag = MATERIAL_TAG,
    params(("material_id" = i32, Path, description = "Material id")),
    responses(
        (status = 204, description = "Success when deleting a material"),
        (status = 404, description = "Material not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_material(
    State(state): State<AppState>,
    Path(material_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    MaterialService::new(&state.db).delete(material_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
