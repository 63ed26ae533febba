use crate::domain::ListId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("List name cannot be empty")]
    EmptyListName,

    #[error("Task name cannot be empty")]
    EmptyTaskName,

    #[error("No list is currently open")]
    NoSelection,

    #[error("List not found: {0}")]
    ListNotFound(ListId),

    #[error("Invalid list ID format: {0}")]
    InvalidListId(String),

    #[error("Invalid task ID format: {0}")]
    InvalidTaskId(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    LoggingError(String),
}
