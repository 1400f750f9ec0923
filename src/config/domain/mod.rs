//! Domain model for guild configuration.
//!
//! Guild settings form a closed, enumerated option set: unknown keys are
//! rejected at the command boundary rather than stored. Defaults are
//! resolved explicitly through [`GuildConfig::default_for`] instead of
//! lazily materialising records.

mod config;
mod error;
mod settings;

pub use config::{GuildConfig, PersistedConfigData};
pub use error::{ConfigValidationError, ParseVisibilityError};
pub use settings::{GuildSettings, SettingChange, TaskVisibility};
