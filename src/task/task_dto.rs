use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Body of `POST /api/tasks`. Both fields may be absent or `null`; the
/// service decides what that means.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Input to the store once defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewTask {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    pub description: String,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(req: CreateTaskRequest) -> Self {
        Self {
            title: req.title.unwrap_or_default(),
            description: req.description.unwrap_or_default(),
        }
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        let mut err = ValidationError::new("title_required");
        err.message = Some("Title is required".into());
        return Err(err);
    }
    Ok(())
}

/// Echo of a freshly created task: the input plus the assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedTask {
    pub id: i64,
    pub title: String,
    pub description: String,
}
