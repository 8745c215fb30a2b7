//! Error types for the Stockyard server application.
//!
//! This module provides the error taxonomy for the API: validation failures
//! (400), missing records (404), configuration problems, and database
//! errors. All errors implement `IntoResponse` for Axum and use `thiserror`
//! for ergonomic definitions. Every error reaches the caller as structured
//! JSON; none are retried internally and none are fatal to the process.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Main error type for the Stockyard server application.
///
/// Aggregates the domain-specific error types and external library errors
/// into a single unified error type, with `#[from]` conversions so `?`
/// works throughout the request path. The `IntoResponse` implementation
/// maps each variant to its HTTP status.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Malformed or constraint-violating input.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A record addressed directly by id does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Invariant violation that the store should have prevented, such as a
    /// dangling foreign key surfacing during response assembly.
    #[error("{0}")]
    InternalError(String),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - validation failures, with a field-level message
/// - 404 Not Found - unknown ids addressed via the request path
/// - 500 Internal Server Error - everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(err) => err.into_response(),
            Self::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{} not found", entity),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic message
/// to the client to avoid exposing internal details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
