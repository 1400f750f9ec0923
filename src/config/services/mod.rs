//! Application services for guild configuration commands.

mod manager;

pub use manager::{
    ConfigCommandError, ConfigCommandResult, ConfigService, UpdateSettingsRequest,
};
