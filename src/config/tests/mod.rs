//! Unit and orchestration tests for guild configuration.
