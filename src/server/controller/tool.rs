use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        tool::{CreateToolDto, ToolDto, ToolListParams, UpdateToolDto},
    },
    server::{
        controller::util::extract::ValidJson, error::Error, model::app::AppState,
        service::tool::ToolService,
    },
};

pub static TOOL_TAG: &str = "tools";

/// List tools with filters, search, and ordering
#[utoipa::path(
    get,
    path = "/api/tools/",
    tag = TOOL_TAG,
    params(ToolListParams),
    responses(
        (status = 200, description = "Success when listing tools", body = Vec<ToolDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tools(
    State(state): State<AppState>,
    Query(params): Query<ToolListParams>,
) -> Result<impl IntoResponse, Error> {
    let tools = ToolService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(tools)))
}

/// Create a tool
#[utoipa::path(
    post,
    path = "/api/tools/",
    tag = TOOL_TAG,
    request_body = CreateToolDto,
    responses(
        (status = 201, description = "Success when creating a tool", body = ToolDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tool(
    State(state): State<AppState>,
    ValidJson(dto): ValidJson<CreateToolDto>,
) -> Result<impl IntoResponse, Error> {
    let tool = ToolService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(tool)))
}

/// Retrieve a tool by id
#[utoipa::path(
    get,
    path = "/api/tools/{tool_id}/",
    tag = TOOL_TAG,
    params(("tool_id" = i32, Path, description = "Tool id")),
    responses(
        (status = 200, description = "Success when retrieving a tool", body = ToolDto),
        (status = 404, description = "Tool not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tool(
    State(state): State<AppState>,
    Path(tool_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tool = ToolService::new(&state.db).get(tool_id).await?;

    Ok((StatusCode::OK, Json(tool)))
}

/// Replace fields of a tool; absent fields are retained
#[utoipa::path(
    put,
    path = "/api/tools/{tool_id}/",
    tag = TOOL_TAG,
    params(("tool_id" = i32, Path, description = "Tool id")),
    request_body = UpdateToolDto,
    responses(
        (status = 200, description = "Success when updating a tool", body = ToolDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 404, description = "Tool not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_tool(
    State(state): State<AppState>,
    Path(tool_id): Path<i32>,
    ValidJson(dto): ValidJson<UpdateToolDto>,
) -> Result<impl IntoResponse, Error> {
    let tool = ToolService::new(&state.db).update(tool_id, dto).await?;

    Ok((StatusCode::OK, Json(tool)))
}

/// Partially update a tool
#[utoipa::path(
    patch,
    path = "/api/tools/{tool_id}/",
    tag = TOOL_TAG,
    params(("tool_id" = i32, Path, description = "Tool id")),
    request_body = UpdateToolDto,
    responses(
        (status = 200, description = "Success when updating a tool", body = ToolDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 404, description = "Tool not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_tool(
    State(state): State<AppState>,
    Path(tool_id): Path<i32>,
    ValidJson(dto): ValidJson<UpdateToolDto>,
) -> Result<impl IntoResponse, Error> {
    let tool = ToolService::new(&state.db).update(tool_id, dto).await?;

    Ok((StatusCode::OK, Json(tool)))
}

/// Delete a tool, detaching its transactions
#[utoipa::path(
    delete,
    path = "/api/tools/{tool_id}/",
    tag = TOOL_TAG,
    params(("tool_id" = i32, Path, description = "Tool id")),
    responses(
        (status = 204, description = "Success when deleting a tool"),
        (status = 404, description = "Tool not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tool(
    State(state): State<AppState>,
    Path(tool_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ToolService::new(&state.db).delete(tool_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
