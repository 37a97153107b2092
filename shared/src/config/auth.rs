//! Authentication configuration: token signing and password hashing

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,

    /// Access token lifetime in minutes
    pub access_token_expire_minutes: i64,

    /// Lifetime of the email verification (registration) token in minutes
    #[serde(default = "default_verification_expiry")]
    pub verification_token_expire_minutes: i64,

    /// Lifetime of the password reset token in minutes
    #[serde(default = "default_reset_expiry")]
    pub reset_token_expire_minutes: i64,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expire_minutes: 60,
            verification_token_expire_minutes: default_verification_expiry(),
            reset_token_expire_minutes: default_reset_expiry(),
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expire_minutes = minutes;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);

        Self {
            jwt: JwtConfig {
                secret,
                access_token_expire_minutes: env_parse(
                    "JWT_ACCESS_TOKEN_EXPIRE_MINUTES",
                    defaults.access_token_expire_minutes,
                ),
                verification_token_expire_minutes: env_parse(
                    "JWT_VERIFICATION_TOKEN_EXPIRE_MINUTES",
                    defaults.verification_token_expire_minutes,
                ),
                reset_token_expire_minutes: env_parse(
                    "JWT_RESET_TOKEN_EXPIRE_MINUTES",
                    defaults.reset_token_expire_minutes,
                ),
                algorithm: default_algorithm(),
            },
            bcrypt_cost: env_parse("BCRYPT_COST", default_bcrypt_cost()),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_verification_expiry() -> i64 {
    30
}

fn default_reset_expiry() -> i64 {
    15
}

fn default_bcrypt_cost() -> u32 {
    12
}
