use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{ErrorResponse, MessageResponse, TaskCreatedResponse, TaskListResponse},
    error::{AppError, Result},
    state::AppState,
};
use super::task_dto::CreateTaskRequest;

/// Create a new task
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = TaskCreatedResponse),
        (status = 400, description = "Missing title or malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "tasks"
)]
pub async fn create_task(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest {
        message: "Invalid request body".to_string(),
        detail: rejection.body_text(),
    })?;

    let task = state.task_service.create_task(payload).await?;

    Ok((StatusCode::CREATED, Json(TaskCreatedResponse::new(task))))
}

/// Most recent incomplete tasks, newest first
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "Up to five incomplete tasks", body = TaskListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "tasks"
)]
pub async fn get_tasks(State(state): State<AppState>) -> Result<Json<TaskListResponse>> {
    let tasks = state.task_service.list_tasks().await?;
    Ok(Json(TaskListResponse::new(tasks)))
}

/// Mark a task as completed
#[utoipa::path(
    put,
    path = "/api/tasks/{id}/complete",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task completed", body = MessageResponse),
        (status = 400, description = "Task already completed", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Storage or update failure", body = ErrorResponse)
    ),
    tag = "tasks"
)]
pub async fn complete_task(
    State(state): State<AppState>,
    task_id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>> {
    // An id that does not parse cannot name a stored task.
    let Path(task_id) = task_id.map_err(|_| AppError::task_not_found())?;

    state.task_service.complete_task(task_id).await?;

    Ok(Json(MessageResponse::new("Task marked as completed")))
}
