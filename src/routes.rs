use crate::{
    dto::{ErrorResponse, MessageResponse, TaskCreatedResponse, TaskListResponse},
    health::{self, health_check, route_not_found},
    state::AppState,
    task::{self, task_routes, CreateTaskRequest, CreatedTask, Task},
};
use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        task::task_handlers::create_task,
        task::task_handlers::get_tasks,
        task::task_handlers::complete_task,
    ),
    components(
        schemas(
            CreateTaskRequest,
            CreatedTask,
            Task,
            TaskCreatedResponse,
            TaskListResponse,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "tasks", description = "Task tracking endpoints"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new().nest("/tasks", task_routes());

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health_check).fallback(route_not_found))
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
