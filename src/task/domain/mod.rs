//! Domain model for the task lifecycle.
//!
//! The task domain models guild-scoped task records and their status
//! machine while keeping all infrastructure concerns outside of the domain
//! boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskTransitionError, TaskValidationError};
pub use ids::{TaskId, TaskTitle};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, TaskEdit};
