//! Pure authorisation decisions for task and configuration mutations.
//!
//! The evaluator is a pure function of the caller's role set, the action
//! kind, and the resolved guild settings. It performs no I/O: callers fetch
//! the guild configuration through the config port and pass the settings in
//! by reference for each decision.

use crate::config::domain::GuildSettings;
use crate::platform::{Caller, UserId};
use thiserror::Error;

/// Action classes subject to authorisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Mutation of a task record (complete, edit, delete).
    TaskMutation {
        /// Owner of the target task.
        owner: UserId,
    },
    /// Mutation of guild-level configuration.
    ConfigMutation,
}

impl Action {
    /// Returns a short description suitable for denial messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::TaskMutation { .. } => "modify this task",
            Self::ConfigMutation => "change guild settings",
        }
    }
}

/// Authorisation failure for a caller and action.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("caller {caller} is not authorised to {}", .action.describe())]
pub struct PermissionDenied {
    /// Caller that was denied.
    pub caller: UserId,
    /// Action that was denied.
    pub action: Action,
}

/// Decides whether `caller` may perform `action` under the guild's settings.
///
/// Task mutations are permitted for the task owner and for guild admins;
/// config mutations are admin-only. Ownership never overrides a missing
/// admin standing for config mutations.
///
/// # Errors
///
/// Returns [`PermissionDenied`] when the caller is authorised neither by
/// ownership nor by admin standing.
pub fn evaluate(
    caller: &Caller,
    action: Action,
    settings: &GuildSettings,
) -> Result<(), PermissionDenied> {
    let allowed = match action {
        Action::TaskMutation { owner } => caller.id() == owner || is_admin(caller, settings),
        Action::ConfigMutation => is_admin(caller, settings),
    };

    if allowed {
        Ok(())
    } else {
        Err(PermissionDenied {
            caller: caller.id(),
            action,
        })
    }
}

/// Returns whether the caller holds admin standing for the guild.
///
/// Admin standing comes from the platform-level administrator flag or from
/// membership in the role designated by [`GuildSettings::admin_role`].
#[must_use]
pub fn is_admin(caller: &Caller, settings: &GuildSettings) -> bool {
    caller.is_platform_admin()
        || settings
            .admin_role()
            .is_some_and(|role| caller.has_role(role))
}

#[cfg(test)]
mod tests {
    use super::{Action, PermissionDenied, evaluate, is_admin};
    use crate::config::domain::{GuildSettings, SettingChange};
    use crate::platform::{Caller, RoleId, UserId};
    use rstest::{fixture, rstest};

    fn user(value: u64) -> UserId {
        UserId::new(value).expect("valid user id")
    }

    fn role(value: u64) -> RoleId {
        RoleId::new(value).expect("valid role id")
    }

    #[fixture]
    fn settings_with_admin_role() -> GuildSettings {
        let mut settings = GuildSettings::default();
        settings.apply(SettingChange::AdminRole(Some(role(900))));
        settings
    }

    #[rstest]
    fn owner_may_mutate_own_task() {
        let caller = Caller::new(user(1));
        let action = Action::TaskMutation { owner: user(1) };

        assert!(evaluate(&caller, action, &GuildSettings::default()).is_ok());
    }

    #[rstest]
    fn non_owner_without_roles_is_denied_task_mutation() {
        let caller = Caller::new(user(2));
        let action = Action::TaskMutation { owner: user(1) };

        let result = evaluate(&caller, action, &GuildSettings::default());
        assert_eq!(
            result,
            Err(PermissionDenied {
                caller: user(2),
                action,
            })
        );
    }

    #[rstest]
    fn platform_admin_may_mutate_any_task() {
        let caller = Caller::new(user(2)).as_platform_admin();
        let action = Action::TaskMutation { owner: user(1) };

        assert!(evaluate(&caller, action, &GuildSettings::default()).is_ok());
    }

    #[rstest]
    fn designated_role_holder_may_mutate_any_task(settings_with_admin_role: GuildSettings) {
        let caller = Caller::new(user(2)).with_roles([role(900)]);
        let action = Action::TaskMutation { owner: user(1) };

        assert!(evaluate(&caller, action, &settings_with_admin_role).is_ok());
    }

    #[rstest]
    fn config_mutation_requires_admin_standing(settings_with_admin_role: GuildSettings) {
        let owner_without_roles = Caller::new(user(1));
        let result = evaluate(
            &owner_without_roles,
            Action::ConfigMutation,
            &settings_with_admin_role,
        );

        assert!(matches!(result, Err(PermissionDenied { .. })));
    }

    #[rstest]
    fn config_mutation_accepts_designated_role(settings_with_admin_role: GuildSettings) {
        let caller = Caller::new(user(5)).with_roles([role(900)]);

        assert!(evaluate(&caller, Action::ConfigMutation, &settings_with_admin_role).is_ok());
    }

    #[rstest]
    fn unrelated_role_grants_no_admin_standing(settings_with_admin_role: GuildSettings) {
        let caller = Caller::new(user(5)).with_roles([role(901)]);

        assert!(!is_admin(&caller, &settings_with_admin_role));
    }
}
