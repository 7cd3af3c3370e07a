pub mod routes;
pub mod task_dto;
pub mod task_handlers;
pub mod task_models;
pub mod task_repository;
pub mod task_service;

#[cfg(test)]
pub(crate) mod memory_store;

pub use routes::task_routes;
pub use task_dto::{CreateTaskRequest, CreatedTask, NewTask};
pub use task_models::Task;
pub use task_repository::{TaskRepository, TaskStore};
pub use task_service::{TaskService, RECENT_TASK_LIMIT};
