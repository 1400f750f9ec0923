//! Taskwarden: guild-scoped task tracking core.
//!
//! This crate implements the state model behind a chat-driven task tracker:
//! task records move through a small lifecycle in response to user commands,
//! guild administrators adjust per-guild settings, and all durable state
//! lives behind persistence ports backed by a remote store of record.
//!
//! # Architecture
//!
//! Taskwarden follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! The chat-platform session layer, slash-command registration, and the
//! hosting liveness endpoint are external collaborators: they supply caller
//! identity and guild scope from platform context and render the typed
//! results and errors produced here back to the user.
//!
//! # Modules
//!
//! - [`platform`]: Platform identifier newtypes and caller identity
//! - [`permission`]: Pure authorisation decisions for mutations
//! - [`task`]: Task lifecycle commands and persistence
//! - [`config`]: Guild configuration commands and persistence

pub mod config;
pub mod permission;
pub mod platform;
pub mod task;
