//! In-memory task store for tests.

mod task;

pub use task::InMemoryTaskStore;
