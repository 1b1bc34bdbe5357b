use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Invalid due date '{0}': expected YYYY-MM-DD")]
    InvalidDueDate(String),

    #[error("Invalid priority '{0}': expected high, medium or low")]
    InvalidPriority(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Task is not completed: {0}. Only completed tasks can be removed")]
    NotCompleted(String),

    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt task file: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
