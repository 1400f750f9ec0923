//! Adapter implementations of the configuration ports.

pub mod memory;
pub mod postgres;
