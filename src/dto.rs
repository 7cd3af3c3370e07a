use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::task::{CreatedTask, Task};

/// Body of a successful `POST /api/tasks`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TaskCreatedResponse {
    pub success: bool,
    pub message: String,
    pub data: CreatedTask,
}

impl TaskCreatedResponse {
    pub fn new(data: CreatedTask) -> Self {
        Self {
            success: true,
            message: "Task created successfully".to_string(),
            data,
        }
    }
}

/// Body of a successful `GET /api/tasks`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TaskListResponse {
    pub success: bool,
    pub data: Vec<Task>,
}

impl TaskListResponse {
    pub fn new(data: Vec<Task>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Success envelope for responses that only confirm an action.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Failure envelope. `error` is a diagnostic string and is not meant to be
/// parsed by callers.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_envelope_has_no_message() {
        let body = serde_json::to_value(TaskListResponse::new(Vec::new())).unwrap();
        assert_eq!(body, json!({ "success": true, "data": [] }));
    }

    #[test]
    fn test_created_envelope() {
        let body = serde_json::to_value(TaskCreatedResponse::new(CreatedTask {
            id: 3,
            title: "Buy milk".to_string(),
            description: String::new(),
        }))
        .unwrap();
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Task created successfully",
                "data": { "id": 3, "title": "Buy milk", "description": "" }
            })
        );
    }

    #[test]
    fn test_error_envelope_omits_missing_error() {
        let body = serde_json::to_value(ErrorResponse::new("Route not found")).unwrap();
        assert_eq!(body, json!({ "success": false, "message": "Route not found" }));
    }
}
