//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! collected into one OpenAPI document, and served alongside Swagger UI at
//! `/api/docs`. The bearer token check is layered over the API routes only;
//! the documentation stays open.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, util::auth::require_bearer_token},
    model::app::AppState,
};

/// Builds the application router with every inventory endpoint, the auth
/// layer, and Swagger UI documentation.
pub fn routes(state: AppState) -> Router {
    #[derive(OpenApi)]
    #[openapi(info(title = "Stockyard", description = "Construction and craft inventory API"), tags(
        (name = controller::discipline::DISCIPLINE_TAG, description = "Trade discipline dimension routes"),
        (name = controller::material::MATERIAL_TAG, description = "Material dimension routes"),
        (name = controller::tool::TOOL_TAG, description = "Tool dimension routes"),
        (name = controller::transaction::TRANSACTION_TAG, description = "Inventory transaction fact routes"),
        (name = controller::date::DATE_TAG, description = "Calendar date dimension routes"),
    ))]
    struct ApiDoc;

    let (api_routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::discipline::get_disciplines,
            controller::discipline::create_discipline
        ))
        .routes(routes!(
            controller::discipline::get_discipline,
            controller::discipline::put_discipline,
            controller::discipline::patch_discipline,
            controller::discipline::delete_discipline
        ))
        .routes(routes!(
            controller::material::get_materials,
            controller::material::create_material
        ))
        .routes(routes!(
            controller::material::get_material,
            controller::material::put_material,
            controller::material::patch_material,
            controller::material::delete_material
        ))
        .routes(routes!(
            controller::tool::get_tools,
            controller::tool::create_tool
        ))
        .routes(routes!(
            controller::tool::get_tool,
            controller::tool::put_tool,
            controller::tool::patch_tool,
            controller::tool::delete_tool
        ))
        .routes(routes!(
            controller::transaction::get_transactions,
            controller::transaction::create_transaction
        ))
        .routes(routes!(
            controller::transaction::get_transaction,
            controller::transaction::put_transaction,
            controller::transaction::patch_transaction,
            controller::transaction::delete_transaction
        ))
        .routes(routes!(
            controller::date::get_dates,
            controller::date::create_date
        ))
        .routes(routes!(
            controller::date::get_date,
            controller::date::delete_date
        ))
        .split_for_parts();

    let api_routes = api_routes.route_layer(middleware::from_fn_with_state(
        state.clone(),
        require_bearer_token,
    ));

    api_routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use sea_orm::DbErr;
    use tower::ServiceExt;

    use crate::{
        model::api::ErrorDto,
        server::{
            router::routes,
            util::test::setup::{test_setup, test_setup_with_tables},
        },
    };

    /// Expect a request without a token to be rejected when one is configured
    #[tokio::test]
    async fn missing_bearer_token_unauthorized() -> Result<(), DbErr> {
        let mut test = test_setup().await?;
        test.state.api_token = Some("workshop-token".to_string());

        let response = routes(test.state)
            .oneshot(
                Request::builder()
                    .uri("/api/disciplines/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorDto = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "Invalid or missing bearer token");

        Ok(())
    }

    /// Expect a wrong token to be rejected the same as a missing one
    #[tokio::test]
    async fn wrong_bearer_token_unauthorized() -> Result<(), DbErr> {
        let mut test = test_setup().await?;
        test.state.api_token = Some("workshop-token".to_string());

        let response = routes(test.state)
            .oneshot(
                Request::builder()
                    .uri("/api/materials/")
                    .header(header::AUTHORIZATION, "Bearer wrong-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect the configured token to grant access
    #[tokio::test]
    async fn configured_bearer_token_accepted() -> Result<(), DbErr> {
        let mut test = test_setup_with_tables().await?;
        test.state.api_token = Some("workshop-token".to_string());

        let response = routes(test.state)
            .oneshot(
                Request::builder()
                    .uri("/api/disciplines/")
                    .header(header::AUTHORIZATION, "Bearer workshop-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        Ok(())
    }

    /// Expect the token check to be disabled when none is configured
    #[tokio::test]
    async fn open_access_without_configured_token() -> Result<(), DbErr> {
        let test = test_setup_with_tables().await?;

        let response = routes(test.state)
            .oneshot(
                Request::builder()
                    .uri("/api/tools/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        Ok(())
    }

    /// Expect an undeserializable body to produce a structured 400 response
    #[tokio::test]
    async fn malformed_body_structured_error() -> Result<(), DbErr> {
        let test = test_setup_with_tables().await?;

        let response = routes(test.state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/disciplines/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"discipline_name": 7}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorDto = serde_json::from_slice(&body).unwrap();
        assert!(!error.error.is_empty());

        Ok(())
    }
}
