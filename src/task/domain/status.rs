//! Task status machine.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
///
/// The machine permits `Open → Done`, `Open → Deleted`, and
/// `Done → Deleted`. `Deleted` is terminal: no operation reopens a deleted
/// task, and deleted records are retained indefinitely for audit history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created and is outstanding.
    Open,
    /// Task has been completed.
    Done,
    /// Task has been soft-deleted and hidden from normal lookups.
    Deleted,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Done => "done",
            Self::Deleted => "deleted",
        }
    }

    /// Returns whether the status machine permits moving to `target`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Open, Self::Done) | (Self::Open | Self::Done, Self::Deleted)
        )
    }

    /// Returns whether the status accepts no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Deleted)
    }

    /// Returns whether title, description, and due-date edits are permitted.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        !self.is_terminal()
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "done" => Ok(Self::Done),
            "deleted" => Ok(Self::Deleted),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
