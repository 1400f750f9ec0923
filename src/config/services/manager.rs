//! Service layer for reading and changing guild configuration.

use crate::config::{
    domain::{ConfigValidationError, GuildConfig, SettingChange},
    ports::{ConfigStore, ConfigStoreError},
};
use crate::permission::{self, Action, PermissionDenied};
use crate::platform::{Caller, GuildId};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for changing guild settings.
///
/// Entries carry raw `key`/`value` text from the command surface; the
/// service validates them against the recognised option set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSettingsRequest {
    entries: Vec<(String, String)>,
}

impl UpdateSettingsRequest {
    /// Creates an empty request.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds one `key`/`value` entry.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Returns whether the request carries no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Service-level errors for configuration commands, one variant per
/// user-visible failure category.
#[derive(Debug, Clone, Error)]
pub enum ConfigCommandError {
    /// A setting key or value failed validation.
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),

    /// The caller lacks admin standing for the guild.
    #[error(transparent)]
    Permission(#[from] PermissionDenied),

    /// A persistence gateway call failed; the write may or may not have
    /// reached the store.
    #[error("storage unavailable: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl From<ConfigStoreError> for ConfigCommandError {
    fn from(err: ConfigStoreError) -> Self {
        match err {
            ConfigStoreError::Unavailable(source) => Self::Storage(source),
        }
    }
}

/// Result type for configuration command operations.
pub type ConfigCommandResult<T> = Result<T, ConfigCommandError>;

/// Guild configuration orchestration service.
///
/// Every operation re-reads through the store port and resolves defaults
/// explicitly; no configuration is cached between commands.
#[derive(Clone)]
pub struct ConfigService<S, C>
where
    S: ConfigStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> ConfigService<S, C>
where
    S: ConfigStore,
    C: Clock + Send + Sync,
{
    /// Creates a new configuration service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Returns the guild's configuration, falling back to the documented
    /// default when no record is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigCommandError::Storage`] when the store lookup fails.
    /// A missing record is not an error.
    pub async fn get(&self, guild_id: GuildId) -> ConfigCommandResult<GuildConfig> {
        let stored = self.store.get_config(guild_id).await?;
        Ok(stored.unwrap_or_else(|| GuildConfig::default_for(guild_id)))
    }

    /// Applies setting changes for a guild, creating the record on first
    /// write.
    ///
    /// Admin standing is checked against the configuration as it stands
    /// before the changes apply. Entries merge into the resolved settings;
    /// keys the request does not mention keep their prior values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigCommandError::Permission`] when the caller lacks
    /// admin standing, [`ConfigCommandError::Validation`] for unknown keys
    /// or malformed values, and [`ConfigCommandError::Storage`] when a
    /// gateway call fails.
    pub async fn set(
        &self,
        guild_id: GuildId,
        caller: &Caller,
        request: UpdateSettingsRequest,
    ) -> ConfigCommandResult<GuildConfig> {
        let mut config = self.get(guild_id).await?;
        permission::evaluate(caller, Action::ConfigMutation, config.settings())?;

        let mut changes = Vec::with_capacity(request.entries.len());
        for (key, value) in &request.entries {
            changes.push(SettingChange::parse(key, value)?);
        }

        for change in changes {
            config.apply(change);
        }
        config.touch(&*self.clock);
        self.store.put_config(&config).await?;
        Ok(config)
    }
}
