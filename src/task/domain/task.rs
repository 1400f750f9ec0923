//! Task aggregate root and partial-edit type.

use super::{TaskId, TaskStatus, TaskTitle, TaskTransitionError};
use crate::platform::{GuildId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;

/// Task aggregate root.
///
/// `id`, `guild_id`, and `owner_id` are immutable after creation. Every
/// mutation refreshes `updated_at` through the injected clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    guild_id: GuildId,
    owner_id: UserId,
    title: TaskTitle,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Guild the task belongs to.
    pub guild_id: GuildId,
    /// User who created the task.
    pub owner_id: UserId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open task owned by `owner_id`.
    #[must_use]
    pub fn new(
        guild_id: GuildId,
        owner_id: UserId,
        title: TaskTitle,
        description: Option<String>,
        due_date: Option<NaiveDate>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            guild_id,
            owner_id,
            title,
            description,
            due_date,
            status: TaskStatus::Open,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            guild_id: data.guild_id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the guild the task belongs to.
    #[must_use]
    pub const fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    /// Returns the user who created the task.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Transitions the task to `target` when the status machine permits it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTransitionError::Unsupported`] when the machine does
    /// not allow the move.
    pub fn transition_to(
        &mut self,
        target: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskTransitionError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskTransitionError::Unsupported {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        self.touch(clock);
        Ok(())
    }

    /// Marks the task done.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTransitionError::Unsupported`] unless the task is open.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), TaskTransitionError> {
        self.transition_to(TaskStatus::Done, clock)
    }

    /// Soft-deletes the task, retaining the record for audit history.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTransitionError::Unsupported`] when the task is already
    /// deleted. Repeating a delete is an error, never a silent no-op.
    pub fn soft_delete(&mut self, clock: &impl Clock) -> Result<(), TaskTransitionError> {
        self.transition_to(TaskStatus::Deleted, clock)
    }

    /// Applies a partial edit to title, description, and due date.
    ///
    /// The status never changes through an edit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskTransitionError::DeletedImmutable`] when the task has
    /// been deleted.
    pub fn apply_edit(
        &mut self,
        edit: TaskEdit,
        clock: &impl Clock,
    ) -> Result<(), TaskTransitionError> {
        if !self.status.is_editable() {
            return Err(TaskTransitionError::DeletedImmutable(self.id));
        }
        if let Some(title) = edit.title {
            self.title = title;
        }
        if let Some(description) = edit.description {
            self.description = description;
        }
        if let Some(due_date) = edit.due_date {
            self.due_date = due_date;
        }
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Partial update for the editable task fields.
///
/// Each field uses two `Option` layers: the outer layer distinguishes
/// "leave unchanged" (`None`) from "apply" (`Some`), and the inner layer
/// carries the new value or clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    title: Option<TaskTitle>,
    description: Option<Option<String>>,
    due_date: Option<Option<NaiveDate>>,
}

impl TaskEdit {
    /// Creates an edit that changes nothing.
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
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn clearing_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub fn clearing_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Returns whether the edit changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.due_date.is_none()
    }
}
