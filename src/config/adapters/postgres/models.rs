//! Diesel row models for guild configuration persistence.

use super::schema::guild_configs;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for configuration records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = guild_configs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ConfigRow {
    /// Guild the record belongs to.
    pub guild_id: i64,
    /// Settings payload in canonical JSON form.
    pub settings: Value,
    /// Timestamp of the last admin change.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Upsert model for configuration records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = guild_configs)]
#[diesel(treat_none_as_null = true)]
pub struct ConfigUpsertRow {
    /// Guild the record belongs to.
    pub guild_id: i64,
    /// Settings payload in canonical JSON form.
    pub settings: Value,
    /// Timestamp of the last admin change.
    pub updated_at: Option<DateTime<Utc>>,
}
