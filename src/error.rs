use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::ErrorResponse;

/// Failure surfaced by a task store. `context` names the store operation,
/// `message` carries the underlying driver text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{context}: {message}")]
pub struct StorageError {
    pub context: &'static str,
    pub message: String,
}

impl StorageError {
    pub fn new(context: &'static str, err: impl std::fmt::Display) -> Self {
        Self {
            context,
            message: err.to_string(),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {message}")]
    BadRequest { message: String, detail: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Task is already completed")]
    AlreadyCompleted,

    #[error("Failed to update task")]
    UpdateFailed,

    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        #[source]
        source: StorageError,
    },
}

impl AppError {
    /// Wraps a store failure with the operation-level message shown to callers.
    pub fn storage(message: &'static str) -> impl FnOnce(StorageError) -> AppError {
        move |source| AppError::Storage { message, source }
    }

    pub fn task_not_found() -> Self {
        AppError::NotFound("Task not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest { .. } | AppError::AlreadyCompleted => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpdateFailed | AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let message = err
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| err.to_string());
        AppError::Validation(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::Storage { message, source } => {
                tracing::error!("{}: {}", message, source);
                ErrorResponse::new(message).with_error(source.to_string())
            }
            AppError::UpdateFailed => {
                tracing::error!("Task update affected no rows");
                ErrorResponse::new("Failed to update task")
            }
            AppError::BadRequest { message, detail } => {
                ErrorResponse::new(message).with_error(detail)
            }
            AppError::Validation(msg) | AppError::NotFound(msg) => ErrorResponse::new(msg),
            AppError::AlreadyCompleted => ErrorResponse::new("Task is already completed"),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
