use axum::Json;

use crate::{dto::MessageResponse, error::AppError};

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is running", body = MessageResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<MessageResponse> {
    Json(MessageResponse::new("Server is running"))
}

/// Fallback for paths and methods no route serves.
pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
