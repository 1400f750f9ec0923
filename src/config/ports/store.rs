//! Store port for guild configuration persistence.

use crate::config::domain::GuildConfig;
use crate::platform::GuildId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for configuration store operations.
pub type ConfigStoreResult<T> = Result<T, ConfigStoreError>;

/// Guild configuration persistence contract.
///
/// The backing store is the system of record; callers hold no authoritative
/// state between invocations. `put_config` has upsert semantics keyed by
/// guild id, making last-write-wins the conflict policy.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Fetches the configuration record for a guild.
    ///
    /// Returns `None` when the guild has never been configured; resolving
    /// defaults for that case is the caller's concern.
    async fn get_config(&self, guild_id: GuildId) -> ConfigStoreResult<Option<GuildConfig>>;

    /// Writes a configuration record, creating it if absent.
    async fn put_config(&self, config: &GuildConfig) -> ConfigStoreResult<()>;
}

/// Errors returned by configuration store implementations.
#[derive(Debug, Clone, Error)]
pub enum ConfigStoreError {
    /// The backing store is unreachable or returned a backend fault.
    #[error("config store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConfigStoreError {
    /// Wraps a backend fault.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
