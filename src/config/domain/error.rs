//! Error types for guild configuration validation and parsing.

use thiserror::Error;

/// Errors returned while validating configuration changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// The setting key is not part of the recognised option set.
    #[error("unknown setting '{0}'")]
    UnknownSetting(String),

    /// The setting value could not be parsed for its key.
    #[error("invalid value '{value}' for setting '{key}': {reason}")]
    InvalidSettingValue {
        /// Recognised setting key the value was supplied for.
        key: String,
        /// Raw value as received from the command surface.
        value: String,
        /// Description of the parse failure.
        reason: String,
    },
}

/// Error returned while parsing visibility values from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task visibility: {0}")]
pub struct ParseVisibilityError(pub String);
