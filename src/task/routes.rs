use axum::{
    routing::{get, put},
    Router,
};

use crate::{health::route_not_found, state::AppState};
use super::task_handlers::{complete_task, create_task, get_tasks};

pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_tasks).post(create_task).fallback(route_not_found),
        )
        .route(
            "/:id/complete",
            put(complete_task).fallback(route_not_found),
        )
}
