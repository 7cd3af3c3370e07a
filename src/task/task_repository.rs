use async_trait::async_trait;

use crate::db::DbPool;
use crate::error::{StorageError, StoreResult};
use crate::task::task_models::Task;

/// Persistence primitives for tasks. Every call is a single statement; none
/// of them treats a missing row as an error.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Inserts an incomplete task and returns its assigned id.
    async fn create(&self, title: &str, description: &str) -> StoreResult<i64>;

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Task>>;

    /// Up to `limit` incomplete tasks, newest first.
    async fn list_recent_incomplete(&self, limit: u32) -> StoreResult<Vec<Task>>;

    /// Flips `completed` on a task that is still incomplete. Returns whether a
    /// row changed; `false` for an unknown id or an already completed task.
    async fn mark_completed(&self, id: i64) -> StoreResult<bool>;
}

const TASK_COLUMNS: &str =
    "id, title, COALESCE(description, '') AS description, completed, created_at";

#[derive(Clone)]
pub struct TaskRepository {
    pool: DbPool,
}

impl TaskRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Removes every task. Used to reset fixtures between tests.
    pub async fn delete_all(&self) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM task")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::new("Error deleting tasks", e))?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl TaskStore for TaskRepository {
    async fn create(&self, title: &str, description: &str) -> StoreResult<i64> {
        let result = sqlx::query("INSERT INTO task (title, description) VALUES (?, ?)")
            .bind(title)
            .bind(description)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::new("Error creating task", e))?;

        i64::try_from(result.last_insert_id())
            .map_err(|e| StorageError::new("Error creating task", e))
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Task>> {
        let query = format!("SELECT {} FROM task WHERE id = ?", TASK_COLUMNS);

        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::new("Error fetching task", e))
    }

    async fn list_recent_incomplete(&self, limit: u32) -> StoreResult<Vec<Task>> {
        let query = format!(
            "SELECT {} FROM task
             WHERE completed = FALSE
             ORDER BY created_at DESC, id DESC
             LIMIT ?",
            TASK_COLUMNS
        );

        sqlx::query_as::<_, Task>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StorageError::new("Error fetching tasks", e))
    }

    async fn mark_completed(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("UPDATE task SET completed = TRUE WHERE id = ? AND completed = FALSE")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::new("Error updating task", e))?;

        Ok(result.rows_affected() == 1)
    }
}
