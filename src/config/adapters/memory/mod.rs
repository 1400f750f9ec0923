//! In-memory configuration store for tests.

mod config;

pub use config::InMemoryConfigStore;
