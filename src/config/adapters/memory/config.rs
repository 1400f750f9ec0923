//! In-memory store for guild configuration tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::config::{
    domain::GuildConfig,
    ports::{ConfigStore, ConfigStoreError, ConfigStoreResult},
};
use crate::platform::GuildId;

/// Thread-safe in-memory configuration store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigStore {
    state: Arc<RwLock<HashMap<GuildId, GuildConfig>>>,
}

impl InMemoryConfigStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn get_config(&self, guild_id: GuildId) -> ConfigStoreResult<Option<GuildConfig>> {
        let state = self
            .state
            .read()
            .map_err(|err| ConfigStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state.get(&guild_id).cloned())
    }

    async fn put_config(&self, config: &GuildConfig) -> ConfigStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ConfigStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        state.insert(config.guild_id(), config.clone());
        Ok(())
    }
}
