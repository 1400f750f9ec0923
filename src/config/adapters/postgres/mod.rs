//! `PostgreSQL` adapter for guild configuration persistence.

pub mod models;
pub mod repository;
pub mod schema;

pub use repository::{ConfigPgPool, PostgresConfigStore};
