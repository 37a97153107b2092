//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `pd_core`:
//!
//! - **Database**: MySQL repositories using SQLx, the connection pool,
//!   embedded migrations and catalog seeding
//! - **Email**: SMTP delivery through lettre, plus a logging sender for
//!   development and a recording sender for tests
//!
//! ## Features
//!
//! - `mock-services`: Expose the recording email sender outside this crate

// Re-export core types for convenience
pub use pd_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Email module - outbound mail delivery
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email delivery error
    #[error("Email error: {0}")]
    Email(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
