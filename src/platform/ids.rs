//! Snowflake identifier newtypes for platform-scoped entities.
//!
//! These types wrap the platform's numeric snowflakes to prevent accidental
//! mixing of different identifier kinds and to validate the range the
//! persistence schema can represent.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned while constructing platform identifiers.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid platform identifier {0}, expected a positive value within i64 range")]
pub struct PlatformIdError(pub u64);

/// Largest snowflake representable in the current `PostgreSQL` schema.
const MAX_PERSISTED_VALUE: u64 = i64::MAX as u64;

/// Identifier of a guild, the chat-platform community scope that owns tasks
/// and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildId(u64);

impl GuildId {
    /// Creates a validated guild identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformIdError`] when the value is zero or exceeds the
    /// schema-backed maximum (`i64::MAX`).
    pub const fn new(value: u64) -> Result<Self, PlatformIdError> {
        if value == 0 || value > MAX_PERSISTED_VALUE {
            return Err(PlatformIdError(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a platform user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformIdError`] when the value is zero or exceeds the
    /// schema-backed maximum (`i64::MAX`).
    pub const fn new(value: u64) -> Result<Self, PlatformIdError> {
        if value == 0 || value > MAX_PERSISTED_VALUE {
            return Err(PlatformIdError(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a guild role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(u64);

impl RoleId {
    /// Creates a validated role identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformIdError`] when the value is zero or exceeds the
    /// schema-backed maximum (`i64::MAX`).
    pub const fn new(value: u64) -> Result<Self, PlatformIdError> {
        if value == 0 || value > MAX_PERSISTED_VALUE {
            return Err(PlatformIdError(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a guild channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(u64);

impl ChannelId {
    /// Creates a validated channel identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformIdError`] when the value is zero or exceeds the
    /// schema-backed maximum (`i64::MAX`).
    pub const fn new(value: u64) -> Result<Self, PlatformIdError> {
        if value == 0 || value > MAX_PERSISTED_VALUE {
            return Err(PlatformIdError(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
