use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        date::{CreateDateDto, DateDto, DateListParams},
    },
    server::{
        controller::util::extract::ValidJson, error::Error, model::app::AppState,
        service::date::DateService,
    },
};

pub static DATE_TAG: &str = "dates";

/// List calendar dates with optional year and range filters
#[utoipa::path(
    get,
    path = "/api/dates/",
    tag = DATE_TAG,
    params(DateListParams),
    responses(
        (status = 200, description = "Success when listing dates", body = Vec<DateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dates(
    State(state): State<AppState>,
    Query(params): Query<DateListParams>,
) -> Result<impl IntoResponse, Error> {
    let dates = DateService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(dates)))
}

/// Load a calendar date row with its external id
#[utoipa::path(
    post,
    path = "/api/dates/",
    tag = DATE_TAG,
    request_body = CreateDateDto,
    responses(
        (status = 201, description = "Success when loading a date", body = DateDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_date(
    State(state): State<AppState>,
    ValidJson(dto): ValidJson<CreateDateDto>,
) -> Result<impl IntoResponse, Error> {
    let date = DateService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(date)))
}

/// Retrieve a calendar date by id
#[utoipa::path(
    get,
    path = "/api/dates/{date_id}/",
    tag = DATE_TAG,
    params(("date_id" = i32, Path, description = "Date id")),
    responses(
        (status = 200, description = "Success when retrieving a date", body = DateDto),
        (status = 404, description = "Date not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_date(
    State(state): State<AppState>,
    Path(date_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let date = DateService::new(&state.db).get(date_id).await?;

    Ok((StatusCode::OK, Json(date)))
}

/// Delete a calendar date, cascading to its transactions
#[utoipa::path(
    delete,
    path = "/api/dates/{date_id}/",
    tag = DATE_TAG,
    params(("date_id" = i32, Path, description = "Date id")),
    responses(
        (status = 204, description = "Success when deleting a date"),
        (status = 404, description = "Date not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_date(
    State(state): State<AppState>,
    Path(date_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    DateService::new(&state.db).delete(date_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
