use crate::TaskId;

/// Reasons a list operation was refused. The screen never shows these
/// directly: the controller turns them into a prompt or a logged no-op.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task title is empty")]
    EmptyTitle,
    #[error("a task titled '{0}' is already registered")]
    DuplicateTitle(String),
    #[error("no task with id {0}")]
    UnknownTask(TaskId),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}'")]
pub struct ParseLocaleError(pub String);
