//! Error types for task domain validation and lifecycle enforcement.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while validating caller-supplied task fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The edit request contains no fields to change.
    #[error("task update contains no fields to apply")]
    EmptyEdit,
}

/// Errors returned when a lifecycle change violates the status machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskTransitionError {
    /// The requested transition is not permitted from the current status.
    #[error("task {task_id} cannot move from {from} to {to}")]
    Unsupported {
        /// Task the transition was requested for.
        task_id: TaskId,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status the transition targeted.
        to: TaskStatus,
    },

    /// The task has been deleted and no longer accepts edits.
    #[error("task {0} is deleted and can no longer be edited")]
    DeletedImmutable(TaskId),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
