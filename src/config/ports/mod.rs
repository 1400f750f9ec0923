//! Port contracts for guild configuration persistence.

pub mod store;

pub use store::{ConfigStore, ConfigStoreError, ConfigStoreResult};
