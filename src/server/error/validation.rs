use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Input that is malformed or violates a schema constraint. Always maps to
/// a 400 response whose message names the offending field where one exists.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{field}: must not be empty")]
    Empty { field: &'static str },
    #[error("{field}: a record with this value already exists")]
    Duplicate { field: &'static str },
    #[error("{field}: referenced record does not exist")]
    UnknownReference { field: &'static str },
    #[error("Either material or tool must be set, but not both")]
    MaterialXorTool,
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
