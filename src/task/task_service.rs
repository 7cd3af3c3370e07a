use std::sync::Arc;

use validator::Validate;

use crate::error::{AppError, Result};
use crate::task::task_dto::{CreateTaskRequest, CreatedTask, NewTask};
use crate::task::task_models::Task;
use crate::task::task_repository::TaskStore;

/// Number of tasks returned by the list operation.
pub const RECENT_TASK_LIMIT: u32 = 5;

/// Service layer for task-related business logic.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    pub async fn create_task(&self, payload: CreateTaskRequest) -> Result<CreatedTask> {
        let new_task = NewTask::from(payload);
        new_task.validate()?;

        let id = self
            .store
            .create(&new_task.title, &new_task.description)
            .await
            .map_err(AppError::storage("Failed to create task"))?;

        tracing::debug!("Created task {}", id);

        Ok(CreatedTask {
            id,
            title: new_task.title,
            description: new_task.description,
        })
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.store
            .list_recent_incomplete(RECENT_TASK_LIMIT)
            .await
            .map_err(AppError::storage("Failed to fetch tasks"))
    }

    /// The conditional update decides the outcome; the follow-up read only
    /// classifies a refusal.
    pub async fn complete_task(&self, id: i64) -> Result<()> {
        let updated = self
            .store
            .mark_completed(id)
            .await
            .map_err(AppError::storage("Failed to complete task"))?;

        if updated {
            tracing::debug!("Completed task {}", id);
            return Ok(());
        }

        let task = self
            .store
            .get_by_id(id)
            .await
            .map_err(AppError::storage("Failed to complete task"))?;

        match task {
            None => Err(AppError::task_not_found()),
            Some(task) if task.completed => Err(AppError::AlreadyCompleted),
            Some(_) => Err(AppError::UpdateFailed),
        }
    }
}
