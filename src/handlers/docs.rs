// src/handlers/docs.rs

use axum::Json;
use utoipa::OpenApi;

use crate::{error::AppError, handlers::quiz};

#[derive(OpenApi)]
#[openapi(
    paths(quiz::evaluate, quiz::categories),
    tags((name = "quiz", description = "Aptitude quiz scoring and stream recommendation"))
)]
pub struct ApiDoc;

/// Serves the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
