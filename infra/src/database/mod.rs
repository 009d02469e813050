//! Database module - MySQL implementations using SQLx
//!
//! This module provides the profile store:
//! - Connection pool management
//! - The `ProfileRepository` implementation
//! - Embedded migrations

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::MySqlProfileRepository;
