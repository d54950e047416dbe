//! System handlers: service info, health, OpenAPI.

use crate::api::AppState;
use crate::types::ServiceInfo;
use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

/// GET / - Static service metadata
#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Service name, version, and routes", body = crate::types::ServiceInfo)
    )
)]
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(state.service.info())
}

/// GET /health - Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /openapi.json - OpenAPI specification
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "system",
    responses(
        (status = 200, description = "OpenAPI 3.1 specification in JSON format")
    )
)]
pub async fn openapi_spec() -> impl IntoResponse {
    use crate::api::openapi::ApiDoc;
    use utoipa::OpenApi;

    Json(ApiDoc::openapi())
}
