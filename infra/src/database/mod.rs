//! Database module - MySQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - Repository pattern implementations
//! - Embedded schema migrations
//! - Catalog seeding

pub mod connection;
pub mod mysql;
pub mod seed;


// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{MySqlOrderRepository, MySqlPizzaRepository, MySqlUserRepository};
pub use seed::{seed_database, SeedProduct, SeedSummary, STARTER_CATALOG};
