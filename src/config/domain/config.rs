//! Guild configuration aggregate.

use super::{GuildSettings, SettingChange};
use crate::platform::GuildId;
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Guild configuration aggregate root.
///
/// One record exists per guild at most. `updated_at` is `None` until the
/// first admin write; a default-resolved configuration has never been
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildConfig {
    guild_id: GuildId,
    settings: GuildSettings,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted configuration record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedConfigData {
    /// Guild the record belongs to.
    pub guild_id: GuildId,
    /// Persisted settings.
    pub settings: GuildSettings,
    /// Timestamp of the last admin change.
    pub updated_at: Option<DateTime<Utc>>,
}

impl GuildConfig {
    /// Returns the documented default configuration for a guild.
    ///
    /// This is the behaviour of a guild with no stored record; resolving it
    /// never creates one.
    #[must_use]
    pub fn default_for(guild_id: GuildId) -> Self {
        Self {
            guild_id,
            settings: GuildSettings::default(),
            updated_at: None,
        }
    }

    /// Reconstructs a configuration from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedConfigData) -> Self {
        Self {
            guild_id: data.guild_id,
            settings: data.settings,
            updated_at: data.updated_at,
        }
    }

    /// Returns the guild this configuration belongs to.
    #[must_use]
    pub const fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    /// Returns the resolved settings.
    #[must_use]
    pub const fn settings(&self) -> &GuildSettings {
        &self.settings
    }

    /// Consumes the configuration, returning its settings.
    #[must_use]
    pub fn into_settings(self) -> GuildSettings {
        self.settings
    }

    /// Returns the timestamp of the last admin change, if any write occurred.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Applies one validated change, leaving other settings untouched.
    pub const fn apply(&mut self, change: SettingChange) {
        self.settings.apply(change);
    }

    /// Records an admin change at the current clock time.
    pub fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = Some(clock.utc());
    }
}
