//! `PostgreSQL` store implementation for guild configuration.

use super::{
    models::{ConfigRow, ConfigUpsertRow},
    schema::guild_configs,
};
use crate::config::{
    domain::{GuildConfig, GuildSettings, PersistedConfigData},
    ports::{ConfigStore, ConfigStoreError, ConfigStoreResult},
};
use crate::platform::GuildId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by configuration adapters.
pub type ConfigPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed configuration store.
#[derive(Debug, Clone)]
pub struct PostgresConfigStore {
    pool: ConfigPgPool,
}

impl PostgresConfigStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ConfigPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ConfigStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ConfigStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ConfigStoreError::unavailable)?;
            f(&mut connection)
        })
        .await
        .map_err(ConfigStoreError::unavailable)?
    }
}

#[async_trait]
impl ConfigStore for PostgresConfigStore {
    async fn get_config(&self, guild_id: GuildId) -> ConfigStoreResult<Option<GuildConfig>> {
        let key = guild_key(guild_id)?;
        self.run_blocking(move |connection| {
            let row = guild_configs::table
                .filter(guild_configs::guild_id.eq(key))
                .select(ConfigRow::as_select())
                .first::<ConfigRow>(connection)
                .optional()
                .map_err(ConfigStoreError::unavailable)?;
            row.map(row_to_config).transpose()
        })
        .await
    }

    async fn put_config(&self, config: &GuildConfig) -> ConfigStoreResult<()> {
        let row = to_upsert_row(config)?;
        self.run_blocking(move |connection| {
            diesel::insert_into(guild_configs::table)
                .values(&row)
                .on_conflict(guild_configs::guild_id)
                .do_update()
                .set(&row)
                .execute(connection)
                .map_err(ConfigStoreError::unavailable)?;
            Ok(())
        })
        .await
    }
}

/// Converts a guild identifier to its schema representation.
fn guild_key(guild_id: GuildId) -> ConfigStoreResult<i64> {
    i64::try_from(guild_id.value()).map_err(ConfigStoreError::unavailable)
}

fn to_upsert_row(config: &GuildConfig) -> ConfigStoreResult<ConfigUpsertRow> {
    let settings =
        serde_json::to_value(config.settings()).map_err(ConfigStoreError::unavailable)?;

    Ok(ConfigUpsertRow {
        guild_id: guild_key(config.guild_id())?,
        settings,
        updated_at: config.updated_at(),
    })
}

fn row_to_config(row: ConfigRow) -> ConfigStoreResult<GuildConfig> {
    let raw_guild = u64::try_from(row.guild_id).map_err(ConfigStoreError::unavailable)?;
    let guild_id = GuildId::new(raw_guild).map_err(ConfigStoreError::unavailable)?;
    let settings = serde_json::from_value::<GuildSettings>(row.settings)
        .map_err(ConfigStoreError::unavailable)?;

    Ok(GuildConfig::from_persisted(PersistedConfigData {
        guild_id,
        settings,
        updated_at: row.updated_at,
    }))
}

#[cfg(test)]
mod tests {
    use super::{ConfigRow, row_to_config, to_upsert_row};
    use crate::config::domain::{GuildConfig, SettingChange, TaskVisibility};
    use crate::platform::GuildId;
    use mockable::{Clock, DefaultClock};
    use rstest::rstest;
    use serde_json::json;

    fn guild(value: u64) -> GuildId {
        GuildId::new(value).expect("valid guild id")
    }

    #[rstest]
    fn upsert_row_round_trips_through_query_row() {
        let mut config = GuildConfig::default_for(guild(42));
        config.apply(SettingChange::DefaultVisibility(TaskVisibility::Private));
        config.touch(&DefaultClock);

        let upsert = to_upsert_row(&config).expect("conversion should succeed");
        let restored = row_to_config(ConfigRow {
            guild_id: upsert.guild_id,
            settings: upsert.settings.clone(),
            updated_at: upsert.updated_at,
        })
        .expect("row conversion should succeed");

        assert_eq!(restored, config);
    }

    #[rstest]
    fn row_with_default_settings_payload_resolves_defaults() {
        let payload = json!({
            "admin_role": null,
            "default_visibility": "public",
            "notification_channel": null,
        });
        let restored = row_to_config(ConfigRow {
            guild_id: 42,
            settings: payload,
            updated_at: Some(DefaultClock.utc()),
        })
        .expect("row conversion should succeed");

        assert_eq!(restored.settings(), GuildConfig::default_for(guild(42)).settings());
    }

    #[rstest]
    fn row_with_unknown_visibility_is_rejected() {
        let payload = json!({
            "admin_role": null,
            "default_visibility": "hidden",
            "notification_channel": null,
        });
        let result = row_to_config(ConfigRow {
            guild_id: 42,
            settings: payload,
            updated_at: None,
        });

        assert!(result.is_err());
    }

    #[rstest]
    fn row_with_non_positive_guild_id_is_rejected() {
        let result = row_to_config(ConfigRow {
            guild_id: -7,
            settings: json!({
                "admin_role": null,
                "default_visibility": "public",
                "notification_channel": null,
            }),
            updated_at: None,
        });

        assert!(result.is_err());
    }
}
