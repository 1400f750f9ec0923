//! Application services for task lifecycle commands.

mod lifecycle;

pub use lifecycle::{
    AddTaskRequest, EditTaskRequest, ListFilter, TaskCommandError, TaskCommandResult,
    TaskCommandService,
};
