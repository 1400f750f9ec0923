//! Caller identity attached to incoming commands.

use super::{RoleId, UserId};

/// Identity the command dispatcher attaches to each incoming command.
///
/// The role set and the platform administrator flag come from platform
/// context, never from user input. The permission evaluator combines them
/// with guild settings to decide admin standing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    id: UserId,
    roles: Vec<RoleId>,
    platform_admin: bool,
}

impl Caller {
    /// Creates a caller with no roles and no platform admin standing.
    #[must_use]
    pub const fn new(id: UserId) -> Self {
        Self {
            id,
            roles: Vec::new(),
            platform_admin: false,
        }
    }

    /// Sets the caller's guild role memberships.
    #[must_use]
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = RoleId>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    /// Marks the caller as holding the platform-level administrator flag.
    #[must_use]
    pub const fn as_platform_admin(mut self) -> Self {
        self.platform_admin = true;
        self
    }

    /// Returns the caller's user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the caller's guild role memberships.
    #[must_use]
    pub fn roles(&self) -> &[RoleId] {
        &self.roles
    }

    /// Returns whether the caller holds the platform administrator flag.
    #[must_use]
    pub const fn is_platform_admin(&self) -> bool {
        self.platform_admin
    }

    /// Returns whether the caller holds the given guild role.
    #[must_use]
    pub fn has_role(&self, role: RoleId) -> bool {
        self.roles.contains(&role)
    }
}
