use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::{model::api::ErrorDto, server::model::app::AppState};

/// Static bearer token check applied to the API routes. Token issuance is
/// external; when no token is configured the check is disabled, which is
/// the local development and test posture.
pub async fn require_bearer_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.api_token.as_deref() else {
        return next.run(request).await;
    };

    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == expected);

    if !authorized {
        tracing::debug!("Rejected request without a valid bearer token");

        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Invalid or missing bearer token".to_string(),
            }),
        )
            .into_response();
    }

    next.run(request).await
}
