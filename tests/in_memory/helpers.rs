//! Shared test helpers for in-memory store integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskwarden::config::{adapters::memory::InMemoryConfigStore, services::ConfigService};
use taskwarden::platform::{Caller, GuildId, RoleId, UserId};
use taskwarden::task::{adapters::memory::InMemoryTaskStore, services::TaskCommandService};

/// Task command service wired to fresh in-memory stores.
pub type TestTaskService = TaskCommandService<InMemoryTaskStore, InMemoryConfigStore, DefaultClock>;

/// Configuration service wired to a fresh in-memory store.
pub type TestConfigService = ConfigService<InMemoryConfigStore, DefaultClock>;

/// Both services sharing the same configuration store.
pub struct Services {
    /// Task lifecycle commands.
    pub tasks: TestTaskService,
    /// Guild configuration commands.
    pub config: TestConfigService,
}

/// Provides task and configuration services backed by shared stores.
#[fixture]
pub fn services() -> Services {
    let task_store = Arc::new(InMemoryTaskStore::new());
    let config_store = Arc::new(InMemoryConfigStore::new());
    let clock = Arc::new(DefaultClock);
    Services {
        tasks: TaskCommandService::new(task_store, Arc::clone(&config_store), Arc::clone(&clock)),
        config: ConfigService::new(config_store, clock),
    }
}

/// Builds a guild identifier for tests.
///
/// # Panics
///
/// Panics if `value` is zero or out of range.
#[must_use]
pub fn guild(value: u64) -> GuildId {
    GuildId::new(value).expect("valid guild id")
}

/// Builds a user identifier for tests.
///
/// # Panics
///
/// Panics if `value` is zero or out of range.
#[must_use]
pub fn user(value: u64) -> UserId {
    UserId::new(value).expect("valid user id")
}

/// Builds a role identifier for tests.
///
/// # Panics
///
/// Panics if `value` is zero or out of range.
#[must_use]
pub fn role(value: u64) -> RoleId {
    RoleId::new(value).expect("valid role id")
}

/// Builds a caller with no roles and no platform admin standing.
#[must_use]
pub fn member(id: u64) -> Caller {
    Caller::new(user(id))
}

/// Builds a caller with platform admin standing.
#[must_use]
pub fn platform_admin(id: u64) -> Caller {
    Caller::new(user(id)).as_platform_admin()
}
