use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        discipline::{CreateDisciplineDto, DisciplineDto, DisciplineListParams, UpdateDisciplineDto},
    },
    server::{
        controller::util::extract::ValidJson, error::Error, model::app::AppState,
        service::discipline::DisciplineService,
    },
};

pub static DISCIPLINE_TAG: &str = "disciplines";

/// List disciplines with optional search and ordering
#[utoipa::path(
    get,
    path = "/api/disciplines/",
    tag = DISCIPLINE_TAG,
    params(DisciplineListParams),
    responses(
        (status = 200, description = "Success when listing disciplines", body = Vec<DisciplineDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_disciplines(
    State(state): State<AppState>,
    Query(params): Query<DisciplineListParams>,
) -> Result<impl IntoResponse, Error> {
    let disciplines = DisciplineService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(disciplines)))
}

/// Create a discipline
#[utoipa::path(
    post,
    path = "/api/disciplines/",
    tag = DISCIPLINE_TAG,
    request_body = CreateDisciplineDto,
    responses(
        (status = 201, description = "Success when creating a discipline", body = DisciplineDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_discipline(
    State(state): State<AppState>,
    ValidJson(dto): ValidJson<CreateDisciplineDto>,
) -> Result<impl IntoResponse, Error> {
    let discipline = DisciplineService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(discipline)))
}

/// Retrieve a discipline by id
#[utoipa::path(
    get,
    path = "/api/disciplines/{discipline_id}/",
    tag = DISCIPLINE_TAG,
    params(("discipline_id" = i32, Path, description = "Discipline id")),
    responses(
        (status = 200, description = "Success when retrieving a discipline", body = DisciplineDto),
        (status = 404, description = "Discipline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_discipline(
    State(state): State<AppState>,
    Path(discipline_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let discipline = DisciplineService::new(&state.db).get(discipline_id).await?;

    Ok((StatusCode::OK, Json(discipline)))
}

/// Replace fields of a discipline; absent fields are retained
#[utoipa::path(
    put,
    path = "/api/disciplines/{discipline_id}/",
    tag = DISCIPLINE_TAG,
    params(("discipline_id" = i32, Path, description = "Discipline id")),
    request_body = UpdateDisciplineDto,
    responses(
        (status = 200, description = "Success when updating a discipline", body = DisciplineDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 404, description = "Discipline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_discipline(
    State(state): State<AppState>,
    Path(discipline_id): Path<i32>,
    ValidJson(dto): ValidJson<UpdateDisciplineDto>,
) -> Result<impl IntoResponse, Error> {
    let discipline = DisciplineService::new(&state.db)
        .update(discipline_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(discipline)))
}

/// Partially update a discipline
#[utoipa::path(
    patch,
    path = "/api/disciplines/{discipline_id}/",
    tag = DISCIPLINE_TAG,
    params(("discipline_id" = i32, Path, description = "Discipline id")),
    request_body = UpdateDisciplineDto,
    responses(
        (status = 200, description = "Success when updating a discipline", body = DisciplineDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 404, description = "Discipline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_discipline(
    State(state): State<AppState>,
    Path(discipline_id): Path<i32>,
    ValidJson(dto): ValidJson<UpdateDisciplineDto>,
) -> Result<impl IntoResponse, Error> {
    let discipline = DisciplineService::new(&state.db)
        .update(discipline_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(discipline)))
}

/// Delete a discipline, detaching its materials and tools
#[utoipa::path(
    delete,
    path = "/api/disciplines/{discipline_id}/",
    tag = DISCIPLINE_TAG,
    params(("discipline_id" = i32, Path, description = "Discipline id")),
    responses(
        (status = 204, description = "Success when deleting a discipline"),
        (status = 404, description = "Discipline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_discipline(
    State(state): State<AppState>,
    Path(discipline_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    DisciplineService::new(&state.db).delete(discipline_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
