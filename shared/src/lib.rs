//! Shared utilities and common types for the pizza delivery server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Utility functions (email validation, etc.)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, EmailConfig, EmailProvider, Environment,
    JwtConfig, LoggingConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse, MessageResponse};
pub use utils::validation;
