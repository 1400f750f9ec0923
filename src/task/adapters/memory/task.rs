//! In-memory store for task lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::platform::GuildId;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Records are keyed by `(guild_id, task_id)`, mirroring the upsert
/// semantics of the remote store of record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<HashMap<(GuildId, TaskId), Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn get_task(&self, guild_id: GuildId, task_id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state.get(&(guild_id, task_id)).cloned())
    }

    async fn list_tasks(&self, guild_id: GuildId) -> TaskStoreResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state
            .values()
            .filter(|task| task.guild_id() == guild_id)
            .cloned()
            .collect())
    }

    async fn put_task(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        state.insert((task.guild_id(), task.id()), task.clone());
        Ok(())
    }
}
