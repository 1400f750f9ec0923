//! Guild configuration management.
//!
//! A guild optionally stores one configuration record holding a small set of
//! recognised settings. Guilds without a stored record behave as if the
//! documented defaults were present; no record is materialised on read. The
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
