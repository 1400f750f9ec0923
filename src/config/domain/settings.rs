//! Recognised guild settings and validated changes to them.

use super::{ConfigValidationError, ParseVisibilityError};
use crate::platform::{ChannelId, PlatformIdError, RoleId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default visibility applied to newly created tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskVisibility {
    /// Tasks are visible to every guild member.
    #[default]
    Public,
    /// Tasks are visible only to their owner and admins.
    Private,
}

impl TaskVisibility {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

impl TryFrom<&str> for TaskVisibility {
    type Error = ParseVisibilityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            _ => Err(ParseVisibilityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The enumerated guild settings with their documented defaults.
///
/// A guild without a stored configuration record behaves exactly as if this
/// structure's [`Default`] were persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildSettings {
    admin_role: Option<RoleId>,
    default_visibility: TaskVisibility,
    notification_channel: Option<ChannelId>,
}

impl GuildSettings {
    /// Returns the role whose holders count as guild admins, if designated.
    #[must_use]
    pub const fn admin_role(&self) -> Option<RoleId> {
        self.admin_role
    }

    /// Returns the default visibility for newly created tasks.
    #[must_use]
    pub const fn default_visibility(&self) -> TaskVisibility {
        self.default_visibility
    }

    /// Returns the channel receiving task notifications, if configured.
    #[must_use]
    pub const fn notification_channel(&self) -> Option<ChannelId> {
        self.notification_channel
    }

    /// Applies one validated change, leaving other settings untouched.
    pub const fn apply(&mut self, change: SettingChange) {
        match change {
            SettingChange::AdminRole(role) => self.admin_role = role,
            SettingChange::DefaultVisibility(visibility) => self.default_visibility = visibility,
            SettingChange::NotificationChannel(channel) => self.notification_channel = channel,
        }
    }
}

/// Setting key for the guild admin role.
pub const KEY_ADMIN_ROLE: &str = "admin_role";
/// Setting key for the default task visibility.
pub const KEY_DEFAULT_VISIBILITY: &str = "default_visibility";
/// Setting key for the task notification channel.
pub const KEY_NOTIFICATION_CHANNEL: &str = "notification_channel";

/// A single validated change to one recognised setting.
///
/// Instances come from [`SettingChange::parse`], which maps the textual
/// `key`/`value` pair of a `config set` command onto the option set and
/// rejects anything outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingChange {
    /// Designates (or clears) the guild admin role.
    AdminRole(Option<RoleId>),
    /// Sets the default visibility for newly created tasks.
    DefaultVisibility(TaskVisibility),
    /// Sets (or clears) the channel receiving task notifications.
    NotificationChannel(Option<ChannelId>),
}

impl SettingChange {
    /// Parses a raw `key`/`value` pair from the command surface.
    ///
    /// An empty value clears the clearable settings (`admin_role`,
    /// `notification_channel`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError::UnknownSetting`] for keys outside
    /// the recognised option set and
    /// [`ConfigValidationError::InvalidSettingValue`] when the value cannot
    /// be parsed for its key.
    pub fn parse(key: &str, value: &str) -> Result<Self, ConfigValidationError> {
        let normalized_key = key.trim().to_ascii_lowercase();
        let trimmed_value = value.trim();

        match normalized_key.as_str() {
            KEY_ADMIN_ROLE => {
                if trimmed_value.is_empty() {
                    return Ok(Self::AdminRole(None));
                }
                let role = parse_snowflake(KEY_ADMIN_ROLE, trimmed_value, RoleId::new)?;
                Ok(Self::AdminRole(Some(role)))
            }
            KEY_DEFAULT_VISIBILITY => {
                let visibility = TaskVisibility::try_from(trimmed_value).map_err(|_| {
                    ConfigValidationError::InvalidSettingValue {
                        key: KEY_DEFAULT_VISIBILITY.to_owned(),
                        value: value.to_owned(),
                        reason: "expected 'public' or 'private'".to_owned(),
                    }
                })?;
                Ok(Self::DefaultVisibility(visibility))
            }
            KEY_NOTIFICATION_CHANNEL => {
                if trimmed_value.is_empty() {
                    return Ok(Self::NotificationChannel(None));
                }
                let channel = parse_snowflake(KEY_NOTIFICATION_CHANNEL, trimmed_value, ChannelId::new)?;
                Ok(Self::NotificationChannel(Some(channel)))
            }
            _ => Err(ConfigValidationError::UnknownSetting(key.to_owned())),
        }
    }

    /// Returns the setting key this change targets.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::AdminRole(_) => KEY_ADMIN_ROLE,
            Self::DefaultVisibility(_) => KEY_DEFAULT_VISIBILITY,
            Self::NotificationChannel(_) => KEY_NOTIFICATION_CHANNEL,
        }
    }
}

/// Parses a numeric snowflake value for the given setting key.
fn parse_snowflake<T>(
    key: &str,
    value: &str,
    construct: impl FnOnce(u64) -> Result<T, PlatformIdError>,
) -> Result<T, ConfigValidationError> {
    let invalid = |reason: &str| ConfigValidationError::InvalidSettingValue {
        key: key.to_owned(),
        value: value.to_owned(),
        reason: reason.to_owned(),
    };

    let raw = value
        .parse::<u64>()
        .map_err(|_| invalid("expected a numeric identifier"))?;
    construct(raw).map_err(|_| invalid("identifier out of range"))
}
