//! In-process `TaskStore` doubles for exercising the service and router
//! without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::error::{StorageError, StoreResult};
use crate::task::task_models::Task;
use crate::task::task_repository::TaskStore;

#[derive(Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<Mutex<Vec<Task>>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, title: &str, description: &str) -> StoreResult<i64> {
        let mut tasks = self.tasks.lock().unwrap();
        let id = tasks.last().map_or(1, |t| t.id + 1);
        // Strictly increasing timestamps keep the ordering deterministic.
        let created_at = Utc::now() + Duration::milliseconds(id);
        tasks.push(Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
            created_at,
        });
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Task>> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn list_recent_incomplete(&self, limit: u32) -> StoreResult<Vec<Task>> {
        let tasks = self.tasks.lock().unwrap();
        let mut open: Vec<Task> = tasks.iter().filter(|t| !t.completed).cloned().collect();
        open.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        open.truncate(limit as usize);
        Ok(open)
    }

    async fn mark_completed(&self, id: i64) -> StoreResult<bool> {
        let mut tasks = self.tasks.lock().unwrap();
        match tasks.iter_mut().find(|t| t.id == id && !t.completed) {
            Some(task) => {
                task.completed = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// A store whose database is unreachable.
pub struct FailingTaskStore;

impl FailingTaskStore {
    fn error(context: &'static str) -> StorageError {
        StorageError::new(context, "pool timed out while waiting for an open connection")
    }
}

#[async_trait]
impl TaskStore for FailingTaskStore {
    async fn create(&self, _title: &str, _description: &str) -> StoreResult<i64> {
        Err(Self::error("Error creating task"))
    }

    async fn get_by_id(&self, _id: i64) -> StoreResult<Option<Task>> {
        Err(Self::error("Error fetching task"))
    }

    async fn list_recent_incomplete(&self, _limit: u32) -> StoreResult<Vec<Task>> {
        Err(Self::error("Error fetching tasks"))
    }

    async fn mark_completed(&self, _id: i64) -> StoreResult<bool> {
        Err(Self::error("Error updating task"))
    }
}

/// Reports no row affected on every update while still serving reads, the
/// shape of a lost write.
pub struct StuckUpdateStore(pub InMemoryTaskStore);

#[async_trait]
impl TaskStore for StuckUpdateStore {
    async fn create(&self, title: &str, description: &str) -> StoreResult<i64> {
        self.0.create(title, description).await
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Option<Task>> {
        self.0.get_by_id(id).await
    }

    async fn list_recent_incomplete(&self, limit: u32) -> StoreResult<Vec<Task>> {
        self.0.list_recent_incomplete(limit).await
    }

    async fn mark_completed(&self, _id: i64) -> StoreResult<bool> {
        Ok(false)
    }
}
