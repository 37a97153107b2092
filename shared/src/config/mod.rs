//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT signing and password hashing settings
//! - `database` - Database connection and pool configuration
//! - `email` - Outbound email delivery and link building
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//!
//! Configuration is built once at startup and handed to the components that
//! need it. Nothing in this crate keeps process-wide state.

pub mod auth;
pub mod database;
pub mod email;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use email::{EmailConfig, EmailProvider};
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Outbound email configuration
    pub email: EmailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            email: EmailConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut logging = LoggingConfig::for_environment(environment);
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            email: EmailConfig::from_env(),
            logging,
        }
    }

    /// Check the configuration for settings that must not reach production
    ///
    /// Returns a list of human readable problems; an empty list means the
    /// configuration is acceptable for the current environment.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.environment.is_production() {
            if self.auth.jwt.is_using_default_secret() {
                problems.push("JWT_SECRET must be set in production".to_string());
            }
            if self.email.provider == EmailProvider::Log {
                problems.push("EMAIL_PROVIDER=log is not allowed in production".to_string());
            }
        }
        if self.auth.jwt.access_token_expire_minutes <= 0 {
            problems.push("JWT_ACCESS_TOKEN_EXPIRE_MINUTES must be positive".to_string());
        }
        problems
    }
}
