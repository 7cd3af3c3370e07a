//! HTTP client for the task API.
//!
//! Mirrors the three task operations plus the health probe. Failures reported
//! by the server come back as [`ClientError::Api`] with the envelope's
//! `message`; the diagnostic `error` field is deliberately not surfaced.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

use crate::dto::{ErrorResponse, MessageResponse, TaskCreatedResponse, TaskListResponse};
use crate::task::{CreatedTask, Task};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Clone)]
pub struct TaskClient {
    http: reqwest::Client,
    base_url: String,
}

impl TaskClient {
    /// `base_url` is the API root, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn create_task(&self, title: &str, description: &str) -> ClientResult<CreatedTask> {
        let response = self
            .http
            .post(format!("{}/tasks", self.base_url))
            .json(&json!({ "title": title, "description": description }))
            .send()
            .await?;

        let body: TaskCreatedResponse = decode(response).await?;
        Ok(body.data)
    }

    pub async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        let response = self
            .http
            .get(format!("{}/tasks", self.base_url))
            .send()
            .await?;

        let body: TaskListResponse = decode(response).await?;
        Ok(body.data)
    }

    /// Returns the server's confirmation message.
    pub async fn complete_task(&self, id: i64) -> ClientResult<String> {
        let response = self
            .http
            .put(format!("{}/tasks/{}/complete", self.base_url, id))
            .send()
            .await?;

        let body: MessageResponse = decode(response).await?;
        Ok(body.message)
    }

    /// The health route lives beside `/api`, not under it.
    pub async fn health(&self) -> ClientResult<String> {
        let root = self.base_url.trim_end_matches("/api");
        let response = self.http.get(format!("{}/health", root)).send().await?;

        let body: MessageResponse = decode(response).await?;
        Ok(body.message)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unexpected response")
            .to_string(),
    };
    Err(ClientError::Api { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;
    use crate::state::{AppState, Config};
    use crate::task::memory_store::InMemoryTaskStore;
    use crate::task::TaskService;
    use std::sync::Arc;

    async fn spawn_server() -> TaskClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let state = AppState {
            config: Arc::new(Config::from_lookup(|_| None).unwrap()),
            task_service: TaskService::new(Arc::new(InMemoryTaskStore::new())),
        };
        tokio::spawn(async move {
            axum::serve(listener, create_router(state)).await.unwrap();
        });

        TaskClient::new(format!("http://{}/api/", addr))
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = TaskClient::new("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }

    #[tokio::test]
    async fn test_client_round_trip() {
        let client = spawn_server().await;

        assert_eq!(client.health().await.unwrap(), "Server is running");

        let created = client.create_task("Buy milk", "2%").await.unwrap();
        assert_eq!(created.title, "Buy milk");

        let tasks = client.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, created.id);

        let message = client.complete_task(created.id).await.unwrap();
        assert_eq!(message, "Task marked as completed");
        assert!(client.list_tasks().await.unwrap().is_empty());

        match client.complete_task(created.id).await.unwrap_err() {
            ClientError::Api { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Task is already completed");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_client_surfaces_validation_message() {
        let client = spawn_server().await;

        match client.create_task("  ", "").await.unwrap_err() {
            ClientError::Api { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Title is required");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_client_unknown_task() {
        let client = spawn_server().await;

        let err = client.complete_task(999_999).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: StatusCode::NOT_FOUND, .. }));
    }
}
