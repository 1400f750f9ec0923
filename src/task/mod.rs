//! Task lifecycle management.
//!
//! This module implements the command-driven task lifecycle: creating task
//! records, listing and inspecting them, and enforcing validated status
//! transitions with ownership and admin checks. Deletion is a status
//! transition rather than physical removal, preserving audit history. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
