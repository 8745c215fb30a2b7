use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        transaction::{
            CreateTransactionDto, TransactionDto, TransactionListParams, UpdateTransactionDto,
        },
    },
    server::{
        controller::util::extract::ValidJson, error::Error, model::app::AppState,
        service::transaction::TransactionService,
    },
};

pub static TRANSACTION_TAG: &str = "transactions";

/// List inventory transactions with filters and ordering
#[utoipa::path(
    get,
    path = "/api/transactions/",
    tag = TRANSACTION_TAG,
    params(TransactionListParams),
    responses(
        (status = 200, description = "Success when listing transactions", body = Vec<TransactionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    Query(params): Query<TransactionListParams>,
) -> Result<impl IntoResponse, Error> {
    let transactions = TransactionService::new(&state.db).list(&params).await?;

    Ok((StatusCode::OK, Json(transactions)))
}

/// Record an inventory transaction against a material or a tool
#[utoipa::path(
    post,
    path = "/api/transactions/",
    tag = TRANSACTION_TAG,
    request_body = CreateTransactionDto,
    responses(
        (status = 201, description = "Success when recording a transaction", body = TransactionDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    ValidJson(dto): ValidJson<CreateTransactionDto>,
) -> Result<impl IntoResponse, Error> {
    let transaction = TransactionService::new(&state.db).create(dto).await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Retrieve a transaction by id with its referenced dimensions embedded
#[utoipa::path(
    get,
    path = "/api/transactions/{transaction_id}/",
    tag = TRANSACTION_TAG,
    params(("transaction_id" = i32, Path, description = "Transaction id")),
    responses(
        (status = 200, description = "Success when retrieving a transaction", body = TransactionDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let transaction = TransactionService::new(&state.db).get(transaction_id).await?;

    Ok((StatusCode::OK, Json(transaction)))
}

/// Replace fields of a transaction; the stored total cost is recomputed
#[utoipa::path(
    put,
    path = "/api/transactions/{transaction_id}/",
    tag = TRANSACTION_TAG,
    params(("transaction_id" = i32, Path, description = "Transaction id")),
    request_body = UpdateTransactionDto,
    responses(
        (status = 200, description = "Success when updating a transaction", body = TransactionDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<i32>,
    ValidJson(dto): ValidJson<UpdateTransactionDto>,
) -> Result<impl IntoResponse, Error> {
    let transaction = TransactionService::new(&state.db)
        .update(transaction_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(transaction)))
}

/// Partially update a transaction
#[utoipa::path(
    patch,
    path = "/api/transactions/{transaction_id}/",
    tag = TRANSACTION_TAG,
    params(("transaction_id" = i32, Path, description = "Transaction id")),
    request_body = UpdateTransactionDto,
    responses(
        (status = 200, description = "Success when updating a transaction", body = TransactionDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<i32>,
    ValidJson(dto): ValidJson<UpdateTransactionDto>,
) -> Result<impl IntoResponse, Error> {
    let transaction = TransactionService::new(&state.db)
        .update(transaction_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(transaction)))
}

/// Delete a transaction
#[utoipa::path(
    delete,
    path = "/api/transactions/{transaction_id}/",
    tag = TRANSACTION_TAG,
    params(("transaction_id" = i32, Path, description = "Transaction id")),
    responses(
        (status = 204, description = "Success when deleting a transaction"),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    TransactionService::new(&state.db).delete(transaction_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
