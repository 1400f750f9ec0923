//! In-memory store integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `task_flow_tests`: End-to-end task lifecycle through the command service
//! - `config_flow_tests`: Guild configuration reads and admin-gated writes

mod in_memory {
    pub mod helpers;

    mod config_flow_tests;
    mod task_flow_tests;
}
