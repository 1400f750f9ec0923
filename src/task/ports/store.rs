//! Store port for task persistence and lookup.

use crate::platform::GuildId;
use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// The backing store is the system of record; services re-read then write
/// through this port on every command and cache nothing in between.
/// `put_task` has upsert semantics keyed by `(guild_id, task_id)`, making
/// last-write-wins the conflict policy for concurrent mutations.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Fetches a single task by guild and task identifier.
    ///
    /// Returns `None` when no such task exists. Deleted tasks are returned
    /// like any other; hiding them from normal lookups is the service's
    /// concern.
    async fn get_task(&self, guild_id: GuildId, task_id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Fetches every task belonging to a guild, deleted ones included.
    ///
    /// Result order is unspecified; callers impose their own ordering.
    async fn list_tasks(&self, guild_id: GuildId) -> TaskStoreResult<Vec<Task>>;

    /// Writes a task record, creating it if absent.
    async fn put_task(&self, task: &Task) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The backing store is unreachable or returned a backend fault.
    #[error("task store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a backend fault.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
