//! Service layer for command-driven task lifecycle operations.
//!
//! Each operation runs read-validate-write to completion: it re-reads the
//! record through the store port, checks permissions against the guild's
//! resolved settings, applies the domain change, and persists before
//! returning. Suspension happens only at port I/O, and no operation reports
//! success unless the write was acknowledged.

use crate::config::{
    domain::{GuildConfig, GuildSettings},
    ports::{ConfigStore, ConfigStoreError},
};
use crate::permission::{self, Action, PermissionDenied};
use crate::platform::{Caller, GuildId, UserId};
use crate::task::{
    domain::{Task, TaskEdit, TaskId, TaskStatus, TaskTitle, TaskTransitionError,
        TaskValidationError},
    ports::{TaskStore, TaskStoreError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    guild_id: GuildId,
    owner_id: UserId,
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
}

impl AddTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(guild_id: GuildId, owner_id: UserId, title: impl Into<String>) -> Self {
        Self {
            guild_id,
            owner_id,
            title: title.into(),
            description: None,
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for editing a task.
///
/// Fields carry raw values from the command surface: an absent field leaves
/// the stored value unchanged, an empty description clears it, and the due
/// date distinguishes replacement from explicit clearing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskRequest {
    title: Option<String>,
    description: Option<String>,
    due_date: Option<Option<NaiveDate>>,
}

impl EditTaskRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
            due_date: None,
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description; an empty value clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn clearing_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Validates the raw fields into a domain edit.
    fn into_edit(self) -> Result<TaskEdit, TaskValidationError> {
        let mut edit = TaskEdit::new();
        if let Some(title) = self.title {
            edit = edit.with_title(TaskTitle::new(title)?);
        }
        if let Some(description) = self.description {
            edit = if description.trim().is_empty() {
                edit.clearing_description()
            } else {
                edit.with_description(description)
            };
        }
        match self.due_date {
            Some(Some(due_date)) => edit = edit.with_due_date(due_date),
            Some(None) => edit = edit.clearing_due_date(),
            None => {}
        }

        if edit.is_empty() {
            return Err(TaskValidationError::EmptyEdit);
        }
        Ok(edit)
    }
}

/// Status filter applied to task listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFilter {
    /// Every task except deleted ones (the default view).
    #[default]
    Active,
    /// Only tasks holding the given status.
    Status(TaskStatus),
    /// Every task, deleted history included.
    All,
}

impl ListFilter {
    /// Returns whether a task with `status` passes the filter.
    #[must_use]
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::Active => status != TaskStatus::Deleted,
            Self::Status(wanted) => status == wanted,
            Self::All => true,
        }
    }
}

/// Service-level errors for task commands, one variant per user-visible
/// failure category.
///
/// The service never swallows or collapses a failure: every operation
/// either returns a fully persisted result or exactly one of these.
#[derive(Debug, Clone, Error)]
pub enum TaskCommandError {
    /// Malformed caller input.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),

    /// The referenced task does not exist in the guild, or is deleted and
    /// hidden from the lookup.
    #[error("task {task_id} was not found in guild {guild_id}")]
    NotFound {
        /// Guild the lookup was scoped to.
        guild_id: GuildId,
        /// Task identifier that failed to resolve.
        task_id: TaskId,
    },

    /// The status machine rejected the requested change.
    #[error(transparent)]
    InvalidTransition(#[from] TaskTransitionError),

    /// The caller is neither the owner nor an admin.
    #[error(transparent)]
    Permission(#[from] PermissionDenied),

    /// A persistence gateway call failed; the write may or may not have
    /// reached the store.
    #[error("storage unavailable: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl From<TaskStoreError> for TaskCommandError {
    fn from(err: TaskStoreError) -> Self {
        match err {
            TaskStoreError::Unavailable(source) => Self::Storage(source),
        }
    }
}

impl From<ConfigStoreError> for TaskCommandError {
    fn from(err: ConfigStoreError) -> Self {
        match err {
            ConfigStoreError::Unavailable(source) => Self::Storage(source),
        }
    }
}

/// Result type for task command operations.
pub type TaskCommandResult<T> = Result<T, TaskCommandError>;

/// Task lifecycle orchestration service.
///
/// Holds no durable state of its own: the task store is the system of
/// record, and guild settings are re-fetched for every permission decision
/// rather than cached across commands.
#[derive(Clone)]
pub struct TaskCommandService<S, G, C>
where
    S: TaskStore,
    G: ConfigStore,
    C: Clock + Send + Sync,
{
    tasks: Arc<S>,
    configs: Arc<G>,
    clock: Arc<C>,
}

impl<S, G, C> TaskCommandService<S, G, C>
where
    S: TaskStore,
    G: ConfigStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task command service.
    #[must_use]
    pub const fn new(tasks: Arc<S>, configs: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            configs,
            clock,
        }
    }

    /// Creates a new open task and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommandError::Validation`] when the title is empty and
    /// [`TaskCommandError::Storage`] when the write fails.
    pub async fn add(&self, request: AddTaskRequest) -> TaskCommandResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let task = Task::new(
            request.guild_id,
            request.owner_id,
            title,
            request.description,
            request.due_date,
            &*self.clock,
        );
        self.tasks.put_task(&task).await?;
        Ok(task)
    }

    /// Lists the guild's tasks ordered by creation time, oldest first.
    ///
    /// Creation-time ties break by task id so repeated listings agree on
    /// one order. The default filter excludes deleted tasks. Never mutates.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommandError::Storage`] when the store lookup fails.
    pub async fn list(&self, guild_id: GuildId, filter: ListFilter) -> TaskCommandResult<Vec<Task>> {
        let mut tasks = self.tasks.list_tasks(guild_id).await?;
        tasks.retain(|task| filter.matches(task.status()));
        tasks.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });
        Ok(tasks)
    }

    /// Returns a single task, hiding deleted records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommandError::NotFound`] when the task is absent or
    /// deleted, and [`TaskCommandError::Storage`] when the lookup fails.
    pub async fn detail(&self, guild_id: GuildId, task_id: TaskId) -> TaskCommandResult<Task> {
        let task = self.fetch(guild_id, task_id).await?;
        if task.status() == TaskStatus::Deleted {
            return Err(TaskCommandError::NotFound { guild_id, task_id });
        }
        Ok(task)
    }

    /// Returns a single task regardless of deletion, for explicit history
    /// lookups.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommandError::NotFound`] when the task is absent and
    /// [`TaskCommandError::Storage`] when the lookup fails.
    pub async fn detail_with_deleted(
        &self,
        guild_id: GuildId,
        task_id: TaskId,
    ) -> TaskCommandResult<Task> {
        self.fetch(guild_id, task_id).await
    }

    /// Marks a task done on behalf of `caller`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommandError::NotFound`] when the task is absent,
    /// [`TaskCommandError::Permission`] unless the caller is the owner or
    /// an admin, [`TaskCommandError::InvalidTransition`] when the task is
    /// already done or deleted, and [`TaskCommandError::Storage`] when a
    /// gateway call fails.
    pub async fn done(
        &self,
        guild_id: GuildId,
        task_id: TaskId,
        caller: &Caller,
    ) -> TaskCommandResult<Task> {
        let mut task = self.fetch(guild_id, task_id).await?;
        self.authorise_mutation(guild_id, caller, task.owner_id())
            .await?;
        task.complete(&*self.clock)?;
        self.tasks.put_task(&task).await?;
        Ok(task)
    }

    /// Applies a partial edit to a task on behalf of `caller`.
    ///
    /// Edits never change the task status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommandError::Validation`] when the edit is empty or
    /// would blank the title, plus the same not-found, permission,
    /// transition, and storage failures as [`Self::done`].
    pub async fn edit(
        &self,
        guild_id: GuildId,
        task_id: TaskId,
        caller: &Caller,
        request: EditTaskRequest,
    ) -> TaskCommandResult<Task> {
        let edit = request.into_edit()?;
        let mut task = self.fetch(guild_id, task_id).await?;
        self.authorise_mutation(guild_id, caller, task.owner_id())
            .await?;
        task.apply_edit(edit, &*self.clock)?;
        self.tasks.put_task(&task).await?;
        Ok(task)
    }

    /// Soft-deletes a task on behalf of `caller`.
    ///
    /// The record is retained with `Deleted` status; repeating the delete
    /// is an invalid transition, never a silent success.
    ///
    /// # Errors
    ///
    /// Returns the same not-found, permission, transition, and storage
    /// failures as [`Self::done`].
    pub async fn delete(
        &self,
        guild_id: GuildId,
        task_id: TaskId,
        caller: &Caller,
    ) -> TaskCommandResult<Task> {
        let mut task = self.fetch(guild_id, task_id).await?;
        self.authorise_mutation(guild_id, caller, task.owner_id())
            .await?;
        task.soft_delete(&*self.clock)?;
        self.tasks.put_task(&task).await?;
        Ok(task)
    }

    async fn fetch(&self, guild_id: GuildId, task_id: TaskId) -> TaskCommandResult<Task> {
        self.tasks
            .get_task(guild_id, task_id)
            .await?
            .ok_or(TaskCommandError::NotFound { guild_id, task_id })
    }

    /// Resolves the guild's settings and gates a task mutation on them.
    async fn authorise_mutation(
        &self,
        guild_id: GuildId,
        caller: &Caller,
        owner: UserId,
    ) -> TaskCommandResult<()> {
        let settings = self.resolve_settings(guild_id).await?;
        permission::evaluate(caller, Action::TaskMutation { owner }, &settings)?;
        Ok(())
    }

    async fn resolve_settings(&self, guild_id: GuildId) -> TaskCommandResult<GuildSettings> {
        let config = self
            .configs
            .get_config(guild_id)
            .await?
            .unwrap_or_else(|| GuildConfig::default_for(guild_id));
        Ok(config.into_settings())
    }
}
